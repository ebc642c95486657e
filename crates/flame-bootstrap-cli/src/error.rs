//! CLI-specific error types and mappings.
//!
//! Maps launch preparation failures to exit codes and user-facing messages.

use flame_bootstrap_core::BootstrapError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The Flame release could not be identified or is too old.
    #[error("{0}")]
    Version(String),

    /// The application path is missing or outside the install root.
    #[error("{0}")]
    NotFound(String),

    /// The host platform is not supported.
    #[error("{0}")]
    Platform(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Any error that is not a `CliError` (see [`exit_code_for`])
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Version(_) => 65,  // EX_DATAERR
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Platform(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,  // EX_OSERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<BootstrapError> for CliError {
    fn from(err: BootstrapError) -> Self {
        let message = err.to_string();
        match err {
            BootstrapError::VersionParse { .. } | BootstrapError::UnsupportedVersion { .. } => {
                Self::Version(message)
            }
            BootstrapError::PathNotFound { .. } | BootstrapError::InvalidAppPath { .. } => {
                Self::NotFound(message)
            }
            BootstrapError::UnsupportedPlatform { .. } => Self::Platform(message),
            BootstrapError::ContextSerialization(msg) => Self::Arguments(msg),
            BootstrapError::Config(_) => Self::Config(message),
        }
    }
}

impl From<flame_bootstrap_core::ConfigError> for CliError {
    fn from(err: flame_bootstrap_core::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
