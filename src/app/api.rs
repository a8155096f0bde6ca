//! API Facade for the application.
//!
//! Wires the production adapters into context creation and command execution.

use std::path::PathBuf;

use crate::adapters::{
    ConsoleReporter, DialoguerPrompt, FilesystemStore, HttpSecretsUploader, TomlConfigStore,
};
use crate::app::{
    AppContext,
    commands::{configs, configure, deploy},
};

pub use crate::app::commands::configure::ConfigureOptions;
pub use crate::app::commands::deploy::DeployOutcome;
pub use crate::domain::AppError;

/// Run the interactive deployment setup in the current directory.
///
/// Returns `None` when the user cancelled.
pub fn setup(options: ConfigureOptions) -> Result<Option<DeployOutcome>, AppError> {
    setup_at(std::env::current_dir()?, options)
}

/// Run the interactive deployment setup with generated files rooted at `root`.
pub fn setup_at(
    root: impl Into<PathBuf>,
    options: ConfigureOptions,
) -> Result<Option<DeployOutcome>, AppError> {
    let store = TomlConfigStore::in_home()?;
    let reporter = ConsoleReporter::new();

    let Some((config, token)) =
        configure::execute(&store, &DialoguerPrompt::new(), &reporter, &options)?
    else {
        return Ok(None);
    };

    let ctx =
        AppContext::new(FilesystemStore::new(root.into()), HttpSecretsUploader::from_env()?, reporter);
    deploy::execute(&ctx, &config, token).map(Some)
}

/// Names of saved deployment configurations.
pub fn list_configs() -> Result<Vec<String>, AppError> {
    configs::list(&TomlConfigStore::in_home()?)
}
