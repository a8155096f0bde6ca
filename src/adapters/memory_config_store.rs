use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::{AppError, DeployConfig};
use crate::ports::ConfigStore;

/// In-memory `ConfigStore`.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    last_used: Mutex<Option<DeployConfig>>,
    saved: Mutex<BTreeMap<String, DeployConfig>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_named(self, name: &str, config: DeployConfig) -> Self {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).insert(name.to_string(), config);
        self
    }

    pub fn with_last_used(self, config: DeployConfig) -> Self {
        *self.last_used.lock().unwrap_or_else(|e| e.into_inner()) = Some(config);
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self, name: Option<&str>) -> Result<Option<DeployConfig>, AppError> {
        Ok(match name {
            Some(name) => self.saved.lock().unwrap_or_else(|e| e.into_inner()).get(name).cloned(),
            None => self.last_used.lock().unwrap_or_else(|e| e.into_inner()).clone(),
        })
    }

    fn save(&self, config: &DeployConfig, name: Option<&str>) -> Result<(), AppError> {
        *self.last_used.lock().unwrap_or_else(|e| e.into_inner()) = Some(config.clone());
        if let Some(name) = name {
            self.saved
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(name.to_string(), config.clone());
        }
        Ok(())
    }

    fn list_named(&self) -> Result<Vec<String>, AppError> {
        Ok(self.saved.lock().unwrap_or_else(|e| e.into_inner()).keys().cloned().collect())
    }
}
