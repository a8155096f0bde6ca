//! Interactive question port.

use crate::domain::{AccessToken, AppError, DeployConfig};

/// Port for collecting a deployment configuration from the user.
///
/// `None` means the user cancelled.
pub trait PromptSession {
    /// Ask every configuration question, pre-filling answers from `defaults`.
    fn collect_config(
        &self,
        defaults: Option<&DeployConfig>,
    ) -> Result<Option<DeployConfig>, AppError>;

    /// Ask for the GitHub personal access token.
    fn access_token(&self) -> Result<Option<AccessToken>, AppError>;
}
