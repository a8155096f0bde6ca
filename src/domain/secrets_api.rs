//! Secrets upload API configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable overriding the upload endpoint.
pub const SECRETS_URL_ENV: &str = "NEXTDEPLOY_SECRETS_URL";

/// Secrets upload API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsApiConfig {
    /// Upload endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SecretsApiConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), timeout_secs: default_timeout() }
    }
}

impl SecretsApiConfig {
    /// Default configuration with the endpoint taken from `NEXTDEPLOY_SECRETS_URL` when set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(SECRETS_URL_ENV) {
            config.endpoint = Url::parse(raw.trim()).map_err(|e| {
                AppError::config_error(format!("{} is not a valid URL: {}", SECRETS_URL_ENV, e))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_endpoint() -> Url {
    Url::parse("https://github-secrets.vercel.app/api/github-secrets")
        .expect("Default secrets endpoint must be valid")
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn defaults() {
        let config = SecretsApiConfig::default();
        assert_eq!(config.endpoint.host_str(), Some("github-secrets.vercel.app"));
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    #[serial]
    fn endpoint_override_from_env() {
        unsafe { std::env::set_var(SECRETS_URL_ENV, "http://127.0.0.1:9/upload") };
        let config = SecretsApiConfig::from_env();
        unsafe { std::env::remove_var(SECRETS_URL_ENV) };
        assert_eq!(config.unwrap().endpoint.as_str(), "http://127.0.0.1:9/upload");
    }

    #[test]
    #[serial]
    fn invalid_override_is_a_configuration_error() {
        unsafe { std::env::set_var(SECRETS_URL_ENV, "not a url") };
        let config = SecretsApiConfig::from_env();
        unsafe { std::env::remove_var(SECRETS_URL_ENV) };
        assert!(matches!(config, Err(AppError::Configuration(_))));
    }
}
