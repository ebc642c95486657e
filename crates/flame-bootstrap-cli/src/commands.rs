//! Subcommands and their shared argument groups.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the Flame version encoded in an application path
    Version {
        /// Path to the Flame executable
        app_path: String,
    },

    /// Print the rewritten launch without running it
    Prepare {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Prepare the launch and run it, exiting with Flame's exit code
    Launch {
        #[command(flatten)]
        launch: LaunchArgs,
    },

    /// Show resolved install and engine locations
    Paths,
}

/// Inputs describing the launch to rewrite.
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Engine instance name in the pipeline environment
    #[arg(short, long = "engine", default_value = "tk-flame")]
    pub engine: String,

    /// Pipeline context as JSON
    #[arg(long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// File holding the pipeline context as JSON
    #[arg(long = "context-file", value_name = "FILE")]
    pub context_file: Option<PathBuf>,

    /// Path to the Flame executable
    pub app_path: String,

    /// Arguments passed through to Flame
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub app_args: Vec<String>,
}

/// How `prepare` prints the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key = value` lines
    Text,
    /// The full plan as JSON
    Json,
    /// `export` lines followed by an `exec` of the rewritten command
    Shell,
}
