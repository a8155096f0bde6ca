//! Secrets service client implementation using reqwest.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, SecretsApiConfig};
use crate::ports::{SecretsUpload, SecretsUploader, UploadReport};

/// HTTP client for the GitHub secrets upload service.
#[derive(Debug, Clone)]
pub struct HttpSecretsUploader {
    endpoint: Url,
    client: Client,
}

impl HttpSecretsUploader {
    pub fn new(config: &SecretsApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint: config.endpoint.clone(), client })
    }

    /// Client for the default endpoint, honouring `NEXTDEPLOY_SECRETS_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&SecretsApiConfig::from_env()?)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    variables: Option<Vec<String>>,
}

impl SecretsUploader for HttpSecretsUploader {
    fn upload(&self, request: SecretsUpload) -> Result<UploadReport, AppError> {
        info!("Uploading env file for {} to {}", request.repository, self.endpoint);

        let env_part = Part::text(request.env_contents)
            .file_name(".env")
            .mime_str("text/plain")
            .map_err(|e| AppError::Upload(format!("Invalid env part: {}", e)))?;
        let form = Form::new()
            .text("repo", request.repository.to_string())
            .text("pat", request.token.expose().to_string())
            .part("env", env_part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .map_err(|e| AppError::Upload(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upload(format!("API error ({}): {}", status.as_u16(), body)));
        }

        let body_text = response
            .text()
            .map_err(|e| AppError::Upload(format!("Failed to read response: {}", e)))?;
        let api_response: ApiResponse = serde_json::from_str(&body_text)
            .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))?;
        debug!("Secrets service reported success={}", api_response.success);

        Ok(UploadReport {
            success: api_response.success,
            variables: api_response.variables.unwrap_or_default(),
        })
    }
}
