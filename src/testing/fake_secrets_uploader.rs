use crate::domain::AppError;
use crate::ports::{SecretsUpload, SecretsUploader, UploadReport};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeSecretsUploader {
    pub uploads: Arc<Mutex<Vec<SecretsUpload>>>,
    pub report: UploadReport,
}

impl FakeSecretsUploader {
    pub fn succeeding(variables: &[&str]) -> Self {
        Self::with_report(UploadReport {
            success: true,
            variables: variables.iter().map(|v| v.to_string()).collect(),
        })
    }

    pub fn with_report(report: UploadReport) -> Self {
        Self { uploads: Arc::new(Mutex::new(vec![])), report }
    }

    pub fn get_uploads(&self) -> Vec<SecretsUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl SecretsUploader for FakeSecretsUploader {
    fn upload(&self, request: SecretsUpload) -> Result<UploadReport, AppError> {
        self.uploads.lock().unwrap().push(request);
        Ok(self.report.clone())
    }
}
