use crate::ports::{ProjectFilesystem, Reporter, SecretsUploader};

/// Application context holding dependencies for a deployment run.
pub struct AppContext<F: ProjectFilesystem, U: SecretsUploader, R: Reporter> {
    filesystem: F,
    uploader: U,
    reporter: R,
}

impl<F: ProjectFilesystem, U: SecretsUploader, R: Reporter> AppContext<F, U, R> {
    pub fn new(filesystem: F, uploader: U, reporter: R) -> Self {
        Self { filesystem, uploader, reporter }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn uploader(&self) -> &U {
        &self.uploader
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
