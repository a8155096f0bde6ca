//! TOML-file adapter for the `ConfigStore` port.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DeployConfig};
use crate::ports::ConfigStore;

/// File name under the home directory.
pub const CONFIG_FILE_NAME: &str = ".nextdeploy.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_used: Option<DeployConfig>,
    #[serde(default)]
    saved: BTreeMap<String, DeployConfig>,
}

/// Saved deployment configurations in a single TOML file.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `~/.nextdeploy.toml`.
    pub fn in_home() -> Result<Self, AppError> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::config_error("Could not determine home directory"))?;
        Ok(Self::new(home.join(CONFIG_FILE_NAME)))
    }

    fn read(&self) -> Result<ConfigFile, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self, name: Option<&str>) -> Result<Option<DeployConfig>, AppError> {
        let mut file = self.read()?;
        Ok(match name {
            Some(name) => file.saved.remove(name),
            None => file.last_used,
        })
    }

    fn save(&self, config: &DeployConfig, name: Option<&str>) -> Result<(), AppError> {
        let mut file = self.read().unwrap_or_else(|e| {
            warn!("Replacing unreadable config file {}: {}", self.path.display(), e);
            ConfigFile::default()
        });

        file.last_used = Some(config.clone());
        if let Some(name) = name {
            file.saved.insert(name.to_string(), config.clone());
        }

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::config_error(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }

    fn list_named(&self) -> Result<Vec<String>, AppError> {
        Ok(self.read()?.saved.into_keys().collect())
    }
}
