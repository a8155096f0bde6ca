pub mod deploy_config;
pub mod env_map;
pub mod error;
pub mod injector;
pub mod output_kind;
pub mod secret_names;
pub mod secrets_api;
pub mod template;
pub mod variant;

pub use deploy_config::{AccessToken, DeployConfig, ProductionTarget, RepoSlug, parse_port};
pub use env_map::EnvMap;
pub use error::AppError;
pub use injector::inject_variables;
pub use output_kind::OutputKind;
pub use secret_names::{SYSTEM_VARIABLES, application_names, is_system_variable};
pub use secrets_api::SecretsApiConfig;
pub use template::{GenerationRequest, TemplateFile, generate};
pub use variant::ProjectVariant;
