//! Terminal prompts backed by dialoguer.

use std::io::ErrorKind;
use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::{
    AccessToken, AppError, DeployConfig, ProductionTarget, ProjectVariant, RepoSlug,
    SYSTEM_VARIABLES, parse_port,
};
use crate::ports::PromptSession;

/// Interactive prompt session on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

/// Ctrl-C surfaces as an interrupted read; treat it as cancellation.
fn answer<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

macro_rules! ask {
    ($result:expr, $what:expr) => {
        match answer($result, $what)? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}

impl PromptSession for DialoguerPrompt {
    fn collect_config(
        &self,
        defaults: Option<&DeployConfig>,
    ) -> Result<Option<DeployConfig>, AppError> {
        let labels: Vec<&str> = ProjectVariant::ALL.iter().map(|v| v.label()).collect();
        let default_variant = defaults
            .and_then(|d| ProjectVariant::ALL.iter().position(|v| *v == d.variant))
            .unwrap_or(0);
        let selection = ask!(
            Select::new()
                .with_prompt("Select the type of Next.js project")
                .items(&labels)
                .default(default_variant)
                .interact_opt(),
            "project type"
        );
        let Some(index) = selection else {
            return Ok(None);
        };
        let variant = ProjectVariant::ALL[index];

        let repository: String = ask!(
            Input::<String>::new()
                .with_prompt("GitHub repository (owner/repo)")
                .with_initial_text(defaults.map(|d| d.repository.to_string()).unwrap_or_default())
                .validate_with(|input: &String| -> Result<(), String> {
                    RepoSlug::new(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text(),
            "repository"
        );
        let repository = RepoSlug::new(&repository)?;

        let domain: String = ask!(
            Input::<String>::new()
                .with_prompt("Domain name for deployment (e.g. example.com, empty to skip)")
                .with_initial_text(defaults.and_then(|d| d.domain.clone()).unwrap_or_default())
                .allow_empty(true)
                .interact_text(),
            "domain"
        );
        let domain = Some(domain.trim().to_string()).filter(|d| !d.is_empty());

        println!("{} Your .env file must define:", "ℹ".blue());
        for name in SYSTEM_VARIABLES {
            println!("  - {}", name);
        }

        let env_file: String = ask!(
            Input::<String>::new()
                .with_prompt("Path to your .env file")
                .with_initial_text(
                    defaults
                        .map(|d| d.env_file.display().to_string())
                        .unwrap_or_else(|| ".env".to_string())
                )
                .validate_with(|input: &String| -> Result<(), &str> {
                    if input.trim().is_empty() { Err(".env file path is required") } else { Ok(()) }
                })
                .interact_text(),
            "env file path"
        );

        let production_branch = ask!(
            Confirm::new()
                .with_prompt("Set up a production branch with a separate workflow?")
                .default(defaults.map(|d| d.production_branch).unwrap_or(true))
                .interact(),
            "production branch choice"
        );

        let production = if production_branch {
            let previous = defaults.and_then(|d| d.production.as_ref());
            let prod_domain: String = ask!(
                Input::<String>::new()
                    .with_prompt("Domain name for production deployment")
                    .with_initial_text(previous.map(|p| p.domain.clone()).unwrap_or_default())
                    .validate_with(|input: &String| -> Result<(), &str> {
                        if input.trim().is_empty() {
                            Err("Production domain name is required")
                        } else {
                            Ok(())
                        }
                    })
                    .interact_text(),
                "production domain"
            );
            let port: String = ask!(
                Input::<String>::new()
                    .with_prompt("Port for production deployment")
                    .default(previous.map(|p| p.port).unwrap_or(3000).to_string())
                    .validate_with(|input: &String| -> Result<(), String> {
                        parse_port(input).map(|_| ()).map_err(|e| e.to_string())
                    })
                    .interact_text(),
                "production port"
            );
            Some(ProductionTarget { domain: prod_domain.trim().to_string(), port: parse_port(&port)? })
        } else {
            None
        };

        Ok(Some(DeployConfig {
            variant,
            repository,
            domain,
            production_branch,
            env_file: PathBuf::from(env_file.trim()),
            production,
        }))
    }

    fn access_token(&self) -> Result<Option<AccessToken>, AppError> {
        loop {
            let value = ask!(
                Password::new()
                    .with_prompt("GitHub Personal Access Token (for setting secrets)")
                    .allow_empty_password(true)
                    .interact(),
                "access token"
            );
            match AccessToken::new(&value) {
                Ok(token) => return Ok(Some(token)),
                Err(e) => eprintln!("{} {}", "✗".red(), e),
            }
        }
    }
}
