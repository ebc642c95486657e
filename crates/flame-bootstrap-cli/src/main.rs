//! CLI entry point - the composition root.
//!
//! Loads `.env` overrides, sets up logging, and dispatches to handlers.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flame_bootstrap_cli::{Cli, Commands, bootstrap, exit_code_for, handlers};

/// Log to stderr so `prepare` output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Version { app_path } => handlers::version::execute(app_path)?,
        Commands::Prepare { launch, format } => {
            let ctx = bootstrap(cli)?;
            handlers::prepare::execute(&ctx, launch, *format)?;
        }
        Commands::Launch { launch } => {
            let ctx = bootstrap(cli)?;
            return handlers::launch::execute(&ctx, launch);
        }
        Commands::Paths => {
            let ctx = bootstrap(cli)?;
            handlers::paths::execute(&ctx)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
