//! Deployment configuration persistence port.

use crate::domain::{AppError, DeployConfig};

/// Port for saved deployment configurations.
pub trait ConfigStore {
    /// Load a named configuration, or the last-used one when `name` is `None`.
    fn load(&self, name: Option<&str>) -> Result<Option<DeployConfig>, AppError>;

    /// Record `config` as last used, and under `name` when given.
    fn save(&self, config: &DeployConfig, name: Option<&str>) -> Result<(), AppError>;

    /// Saved configuration names in sorted order.
    fn list_named(&self) -> Result<Vec<String>, AppError>;
}
