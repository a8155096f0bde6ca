use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for nextdeploy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The environment file could not be read.
    #[error("Failed to read env file '{}': {source}", path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deployment credentials absent from the environment file.
    #[error("Missing required variables in env file: {}", .0.join(", "))]
    MissingRequiredVariables(Vec<String>),

    /// Project variant identifier is not one of the known variants.
    #[error("Unknown project variant '{0}': must be one of plain, env, prisma")]
    UnknownVariant(String),

    /// The secrets upload request failed.
    #[error("Secrets upload failed: {0}")]
    Upload(String),

    /// A generated file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template lacks an insertion point the generator relies on.
    #[error("Template '{template}' has no '{anchor}' anchor")]
    AnchorNotFound { template: String, anchor: String },

    /// A rendered file failed structural validation.
    #[error("Generated {path} is not valid YAML: {details}")]
    MalformedOutput { path: String, details: String },

    /// Repository identifier is not of the form owner/repo.
    #[error("Invalid repository '{0}': expected the form owner/repo")]
    InvalidRepository(String),

    /// Port outside 1-65535.
    #[error("Invalid port '{0}': must be a number between 1 and 65535")]
    InvalidPort(String),

    /// Access token is empty.
    #[error("GitHub access token must not be empty")]
    InvalidToken,

    /// Named configuration absent from the store.
    #[error("Saved configuration '{0}' not found")]
    SavedConfigNotFound(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Interactive prompt failure.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Map this error to the closest `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::EnvFileRead { source, .. } | AppError::WriteFailed { source, .. } => {
                source.kind()
            }
            AppError::SavedConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::PathTraversal(_) => io::ErrorKind::PermissionDenied,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::TomlParse(_) | AppError::MalformedOutput { .. } => io::ErrorKind::InvalidData,
            AppError::MissingRequiredVariables(_)
            | AppError::UnknownVariant(_)
            | AppError::InvalidRepository(_)
            | AppError::InvalidPort(_)
            | AppError::InvalidToken
            | AppError::AnchorNotFound { .. } => io::ErrorKind::InvalidInput,
            AppError::Upload(_) | AppError::Configuration(_) => io::ErrorKind::Other,
        }
    }
}
