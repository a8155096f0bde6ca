//! Setup command implementation.

use clap::Args;
use colored::Colorize;

use crate::app::api::{self, ConfigureOptions};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Reuse a saved configuration instead of answering the questions
    #[arg(long, value_name = "NAME")]
    pub from: Option<String>,
    /// Save the answers under this name for later `--from` runs
    #[arg(long, value_name = "NAME")]
    pub save_as: Option<String>,
    /// GitHub personal access token used to set repository secrets
    #[arg(long, env = "NEXTDEPLOY_GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

pub fn run_setup(args: SetupArgs) -> Result<(), AppError> {
    let options = ConfigureOptions { from: args.from, save_as: args.save_as, token: args.token };
    if api::setup(options)?.is_none() {
        println!("{}", "Setup cancelled.".yellow());
    }
    Ok(())
}
