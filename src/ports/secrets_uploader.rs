//! Secrets upload port definition.

use crate::domain::{AccessToken, AppError, RepoSlug};

/// Request to store the contents of an env file as repository secrets.
#[derive(Debug, Clone)]
pub struct SecretsUpload {
    pub repository: RepoSlug,
    pub token: AccessToken,
    /// Raw env file text, sent unmodified.
    pub env_contents: String,
}

/// Outcome reported by the secrets service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Whether every variable was stored.
    pub success: bool,
    /// Variable names the service processed; on failure, the ones that failed.
    pub variables: Vec<String>,
}

/// Port for the remote secrets service.
pub trait SecretsUploader {
    fn upload(&self, request: SecretsUpload) -> Result<UploadReport, AppError>;
}
