use crate::domain::{DeployConfig, ProductionTarget, ProjectVariant, RepoSlug};
use std::path::PathBuf;

pub const SYSTEM_ENV: &str = "SERVER_HOST=203.0.113.10\nSERVER_USER=deploy\nSSH_PRIVATE_KEY=\"-----BEGIN KEY-----\"\n";

pub fn deploy_config(variant: ProjectVariant) -> DeployConfig {
    DeployConfig {
        variant,
        repository: RepoSlug::new("acme/shop").unwrap(),
        domain: Some("shop.example.com".to_string()),
        production_branch: false,
        env_file: PathBuf::from(".env"),
        production: None,
    }
}

pub fn with_production(mut config: DeployConfig, domain: &str, port: u16) -> DeployConfig {
    config.production_branch = true;
    config.production = Some(ProductionTarget { domain: domain.to_string(), port });
    config
}
