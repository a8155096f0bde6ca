use crate::domain::{AccessToken, AppError, DeployConfig};
use crate::ports::PromptSession;
use std::sync::{Arc, Mutex};

/// Prompt session that answers from a script and records the defaults it was offered.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    pub config: Option<DeployConfig>,
    pub token: Option<String>,
    pub offered_defaults: Arc<Mutex<Vec<Option<DeployConfig>>>>,
    pub token_requests: Arc<Mutex<usize>>,
}

impl ScriptedPrompt {
    pub fn answering(config: DeployConfig, token: &str) -> Self {
        Self { config: Some(config), token: Some(token.to_string()), ..Self::default() }
    }

    /// A session where the user cancels every question.
    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn offered_defaults(&self) -> Vec<Option<DeployConfig>> {
        self.offered_defaults.lock().unwrap().clone()
    }

    pub fn token_requests(&self) -> usize {
        *self.token_requests.lock().unwrap()
    }
}

impl PromptSession for ScriptedPrompt {
    fn collect_config(
        &self,
        defaults: Option<&DeployConfig>,
    ) -> Result<Option<DeployConfig>, AppError> {
        self.offered_defaults.lock().unwrap().push(defaults.cloned());
        Ok(self.config.clone())
    }

    fn access_token(&self) -> Result<Option<AccessToken>, AppError> {
        *self.token_requests.lock().unwrap() += 1;
        self.token.as_deref().map(AccessToken::new).transpose()
    }
}
