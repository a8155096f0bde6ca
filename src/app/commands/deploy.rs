//! Deployment run: env file to secrets upload to generated files.

use std::path::PathBuf;

use log::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AccessToken, AppError, DeployConfig, EnvMap, GenerationRequest, SYSTEM_VARIABLES, generate,
};
use crate::ports::{ProjectFilesystem, Reporter, SecretsUpload, SecretsUploader};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub written: Vec<PathBuf>,
    pub uploaded: Vec<String>,
    pub upload_succeeded: bool,
}

/// Execute a deployment setup run.
///
/// Fails before any upload or write when a system variable is missing from the env file.
pub fn execute<F, U, R>(
    ctx: &AppContext<F, U, R>,
    config: &DeployConfig,
    token: AccessToken,
) -> Result<DeployOutcome, AppError>
where
    F: ProjectFilesystem,
    U: SecretsUploader,
    R: Reporter,
{
    let reporter = ctx.reporter();

    reporter.step(1, "Loading environment file");
    let env_contents = ctx.filesystem().read_text(&config.env_file)?;
    let env = EnvMap::parse(&env_contents);
    debug!("Parsed {} variables from {}", env.len(), config.env_file.display());

    let missing = missing_system_variables(&env);
    if !missing.is_empty() {
        return Err(AppError::MissingRequiredVariables(missing));
    }

    reporter.step(2, "Verifying SSH configuration");
    reporter.info(&format!("SERVER_HOST: {}", env.get("SERVER_HOST").unwrap_or_default()));
    reporter.info(&format!("SERVER_USER: {}", env.get("SERVER_USER").unwrap_or_default()));
    reporter.info("SSH_PRIVATE_KEY: [Key content hidden]");

    reporter.step(3, "Uploading environment variables to GitHub secrets");
    let report = ctx.uploader().upload(SecretsUpload {
        repository: config.repository.clone(),
        token,
        env_contents,
    })?;
    if report.success {
        reporter.success("Uploaded environment variables to GitHub secrets");
    } else {
        reporter.error("Failed to upload some environment variables to GitHub secrets");
        if !report.variables.is_empty() {
            reporter.error(&format!("Failed variables: {}", report.variables.join(", ")));
        }
    }
    let required = config.variant.required_variable();
    if let Some(required) = required.filter(|r| !report.variables.iter().any(|n| n == r)) {
        reporter.warn(&format!(
            "{} was not among the uploaded secrets; {} projects usually need it",
            required,
            config.variant.label()
        ));
    }

    reporter.step(4, "Generating deployment files");
    let files = generate(&GenerationRequest {
        variant: config.variant,
        env: &env,
        secret_names: &report.variables,
        domain: config.domain.as_deref(),
        production_branch: config.production_branch,
        production_domain: config.production_domain(),
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        ctx.filesystem().write_file(&file.path, &file.content)?;
        info!("Wrote {}", file.path.display());
        written.push(file.path);
    }

    let outcome =
        DeployOutcome { written, uploaded: report.variables, upload_succeeded: report.success };
    report_summary(reporter, config, &outcome);
    Ok(outcome)
}

/// System variables absent from `env` or bound to an empty value, in canonical order.
fn missing_system_variables(env: &EnvMap) -> Vec<String> {
    SYSTEM_VARIABLES
        .iter()
        .filter(|name| env.get(name).is_none_or(|value| value.is_empty()))
        .map(|name| name.to_string())
        .collect()
}

fn report_summary<R: Reporter>(reporter: &R, config: &DeployConfig, outcome: &DeployOutcome) {
    reporter.step(5, "Deployment setup completed");

    reporter.success("All deployment files have been created:");
    for path in &outcome.written {
        reporter.line(&format!("- {}", path.display()));
    }

    reporter.info("Next steps:");
    reporter.line("1. Commit and push these files to your GitHub repository");
    reporter.line("2. GitHub Actions will deploy your application when you push to the main branch");
    if config.production_branch {
        reporter.line(
            "3. For production, merge the promotion pull request into the prod branch or trigger the deploy-prod workflow manually",
        );
    }

    if !outcome.uploaded.is_empty() {
        let heading = if outcome.upload_succeeded {
            "The following secrets have been added to your GitHub repository:"
        } else {
            "The following secrets could not be added and are still wired into the files:"
        };
        reporter.info(heading);
        for name in &outcome.uploaded {
            reporter.line(&format!("- {}", name));
        }
    }

    if let Some(production) = config.production.as_ref().filter(|_| config.production_branch) {
        reporter.info("Production deployment information:");
        reporter.line(&format!("- Domain: {}", production.domain));
        reporter.line(&format!("- Port: {}", production.port));
    }
}
