//! Deployment configuration collected from the user.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::AppError;
use super::variant::ProjectVariant;

/// A validated GitHub repository identifier of the form `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RepoSlug(String);

impl RepoSlug {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let valid = match value.split_once('/') {
            Some((owner, repo)) => {
                !owner.is_empty()
                    && !repo.is_empty()
                    && !repo.contains('/')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };

        if valid { Ok(Self(value.to_string())) } else { Err(AppError::InvalidRepository(value.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Repository name without the owner.
    pub fn name(&self) -> &str {
        self.0.split_once('/').map(|(_, repo)| repo).unwrap_or(&self.0)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RepoSlug> for String {
    fn from(val: RepoSlug) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for RepoSlug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RepoSlug::new(&s).map_err(serde::de::Error::custom)
    }
}

/// GitHub personal access token used for the secrets upload.
///
/// Never persisted; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::InvalidToken);
        }
        Ok(Self(value.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Production deployment target reached through the `prod` branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTarget {
    pub domain: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

pub fn parse_port(value: &str) -> Result<u16, AppError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(AppError::InvalidPort(value.to_string())),
    }
}

pub fn default_port() -> u16 {
    3000
}

/// Everything a run needs besides the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    pub variant: ProjectVariant,
    pub repository: RepoSlug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub production_branch: bool,
    pub env_file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionTarget>,
}

impl DeployConfig {
    /// Production domain, only when the production branch is requested.
    pub fn production_domain(&self) -> Option<&str> {
        if !self.production_branch {
            return None;
        }
        self.production.as_ref().map(|target| target.domain.as_str())
    }
}
