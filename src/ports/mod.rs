mod config_store;
mod project_filesystem;
mod prompt_session;
mod reporter;
mod secrets_uploader;

pub use config_store::ConfigStore;
pub use project_filesystem::ProjectFilesystem;
pub use prompt_session::PromptSession;
pub use reporter::Reporter;
pub use secrets_uploader::{SecretsUpload, SecretsUploader, UploadReport};
