//! nextdeploy: generate Docker and GitHub Actions deployment files for Next.js projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ConfigureOptions, DeployOutcome, list_configs, setup, setup_at};
pub use domain::{AppError, DeployConfig, ProjectVariant};
