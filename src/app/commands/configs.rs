//! List saved deployment configurations.

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Names of saved configurations, sorted.
pub fn list<S: ConfigStore>(store: &S) -> Result<Vec<String>, AppError> {
    store.list_named()
}
