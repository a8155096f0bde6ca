//! CLI Adapter.

mod configs;
mod setup;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "nextdeploy")]
#[command(version)]
#[command(
    about = "Generate Docker and GitHub Actions deployment files for a Next.js project",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    setup: setup::SetupArgs,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for the deployment settings, upload secrets and write the files (default)
    #[clap(visible_alias = "s")]
    Setup(setup::SetupArgs),
    /// List saved deployment configurations
    #[clap(visible_alias = "c")]
    Configs,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over the flag.
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        None => setup::run_setup(cli.setup),
        Some(Commands::Setup(args)) => setup::run_setup(args),
        Some(Commands::Configs) => configs::run_configs(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
