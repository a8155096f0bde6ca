//! Resolve the deployment configuration and access token for a run.

use log::{debug, warn};

use crate::domain::{AccessToken, AppError, DeployConfig};
use crate::ports::{ConfigStore, PromptSession, Reporter};

/// Options for configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    /// Use this saved configuration instead of asking.
    pub from: Option<String>,
    /// Also store the resolved configuration under this name.
    pub save_as: Option<String>,
    /// Token supplied on the command line or via the environment.
    pub token: Option<String>,
}

/// Resolve a configuration and token, or `None` if the user cancelled.
pub fn execute<S, P, R>(
    store: &S,
    prompt: &P,
    reporter: &R,
    options: &ConfigureOptions,
) -> Result<Option<(DeployConfig, AccessToken)>, AppError>
where
    S: ConfigStore,
    P: PromptSession,
    R: Reporter,
{
    let config = match options.from.as_deref() {
        Some(name) => {
            let config = store
                .load(Some(name))?
                .ok_or_else(|| AppError::SavedConfigNotFound(name.to_string()))?;
            reporter.info(&format!("Using saved configuration '{}'", name));
            config
        }
        None => {
            let previous = store.load(None).unwrap_or_else(|e| {
                warn!("Ignoring unreadable saved configuration: {}", e);
                None
            });
            match prompt.collect_config(previous.as_ref())? {
                Some(config) => config,
                None => return Ok(None),
            }
        }
    };

    let token = match options.token.as_deref() {
        Some(value) => AccessToken::new(value)?,
        None => match prompt.access_token()? {
            Some(token) => token,
            None => return Ok(None),
        },
    };

    match store.save(&config, options.save_as.as_deref()) {
        Ok(()) => debug!("Recorded configuration for {}", config.repository),
        Err(e) => reporter.warn(&format!("Could not save configuration: {}", e)),
    }

    Ok(Some((config, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConfigStore;
    use crate::domain::ProjectVariant;
    use crate::testing::{RecordingReporter, ScriptedPrompt, deploy_config};

    struct BrokenStore;

    impl ConfigStore for BrokenStore {
        fn load(&self, _name: Option<&str>) -> Result<Option<DeployConfig>, AppError> {
            Err(AppError::config_error("unreadable"))
        }

        fn save(&self, _config: &DeployConfig, _name: Option<&str>) -> Result<(), AppError> {
            Err(AppError::config_error("read-only"))
        }

        fn list_named(&self) -> Result<Vec<String>, AppError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn prompts_with_last_used_defaults_and_records_result() {
        let previous = deploy_config(ProjectVariant::Plain);
        let store = MemoryConfigStore::new().with_last_used(previous.clone());
        let answer = deploy_config(ProjectVariant::EnvDriven);
        let prompt = ScriptedPrompt::answering(answer.clone(), "ghp_abc");
        let options = ConfigureOptions { save_as: Some("shop".into()), ..Default::default() };

        let (config, token) =
            execute(&store, &prompt, &RecordingReporter::new(), &options).unwrap().unwrap();

        assert_eq!(config, answer);
        assert_eq!(token.expose(), "ghp_abc");
        assert_eq!(prompt.offered_defaults(), vec![Some(previous)]);
        assert_eq!(store.load(None).unwrap(), Some(answer.clone()));
        assert_eq!(store.load(Some("shop")).unwrap(), Some(answer));
    }

    #[test]
    fn named_config_skips_questions_but_asks_for_token() {
        let saved = deploy_config(ProjectVariant::DatabaseBacked);
        let store = MemoryConfigStore::new().with_named("shop", saved.clone());
        let prompt = ScriptedPrompt::answering(deploy_config(ProjectVariant::Plain), "ghp_abc");
        let options = ConfigureOptions { from: Some("shop".into()), ..Default::default() };

        let (config, _) =
            execute(&store, &prompt, &RecordingReporter::new(), &options).unwrap().unwrap();

        assert_eq!(config, saved);
        assert!(prompt.offered_defaults().is_empty());
        assert_eq!(prompt.token_requests(), 1);
    }

    #[test]
    fn unknown_saved_config_is_an_error() {
        let options = ConfigureOptions { from: Some("ghost".into()), ..Default::default() };
        let err = execute(
            &MemoryConfigStore::new(),
            &ScriptedPrompt::cancelled(),
            &RecordingReporter::new(),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SavedConfigNotFound(name) if name == "ghost"));
    }

    #[test]
    fn supplied_token_is_not_prompted() {
        let prompt = ScriptedPrompt::answering(deploy_config(ProjectVariant::Plain), "unused");
        let options = ConfigureOptions { token: Some("ghp_flag".into()), ..Default::default() };

        let (_, token) = execute(&MemoryConfigStore::new(), &prompt, &RecordingReporter::new(), &options)
            .unwrap()
            .unwrap();

        assert_eq!(token.expose(), "ghp_flag");
        assert_eq!(prompt.token_requests(), 0);
    }

    #[test]
    fn empty_supplied_token_is_rejected() {
        let prompt = ScriptedPrompt::answering(deploy_config(ProjectVariant::Plain), "unused");
        let options = ConfigureOptions { token: Some(String::new()), ..Default::default() };
        let err =
            execute(&MemoryConfigStore::new(), &prompt, &RecordingReporter::new(), &options).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn cancellation_saves_nothing() {
        let store = MemoryConfigStore::new();
        let result = execute(
            &store,
            &ScriptedPrompt::cancelled(),
            &RecordingReporter::new(),
            &ConfigureOptions::default(),
        )
        .unwrap();
        assert!(result.is_none());
        assert_eq!(store.load(None).unwrap(), None);
    }

    #[test]
    fn broken_store_only_warns() {
        let prompt = ScriptedPrompt::answering(deploy_config(ProjectVariant::Plain), "ghp_abc");
        let reporter = RecordingReporter::new();

        let resolved =
            execute(&BrokenStore, &prompt, &reporter, &ConfigureOptions::default()).unwrap();

        assert!(resolved.is_some());
        assert_eq!(prompt.offered_defaults(), vec![None]);
        assert!(reporter.contains("warn: Could not save configuration"));
    }
}
