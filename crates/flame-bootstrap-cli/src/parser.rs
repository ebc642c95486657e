//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for preparing Flame launches.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "flame-bootstrap")]
#[command(about = "Prepare and launch Flame under the pipeline toolkit")]
#[command(version)]
pub struct Cli {
    /// Root of the Flame installs [overrides FLAME_BOOTSTRAP_INSTALL_ROOT]
    #[arg(long = "install-root", global = true)]
    pub install_root: Option<PathBuf>,

    /// Root of the engine install (holds resources/ and python/startup/)
    /// [overrides FLAME_BOOTSTRAP_ENGINE_ROOT]
    #[arg(long = "engine-root", global = true)]
    pub engine_root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "flame-bootstrap",
            "--verbose",
            "--install-root",
            "/mnt/discreet",
            "paths",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.install_root, Some(PathBuf::from("/mnt/discreet")));
        assert!(matches!(cli.command, Commands::Paths));
    }
}
