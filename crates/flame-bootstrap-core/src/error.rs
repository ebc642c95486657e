//! Launch preparation error types.
//!
//! Every variant is terminal: the caller receives no plan and nothing has
//! been applied to any environment.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::version::FlameVersion;

/// Errors that can occur while preparing a Flame launch.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No `/flame*_<version>/` or `/flare*_<version>/` segment in the path.
    #[error("Cannot extract Flame version number from the path '{path}'")]
    VersionParse { path: String },

    /// The detected release is older than 2015 extension 2.
    #[error(
        "Flame {version} is not supported: the integration needs at least Flame 2015, extension 2"
    )]
    UnsupportedVersion { version: FlameVersion },

    /// The application executable is missing on disk.
    #[error("Cannot launch Flame - the path '{}' does not exist on disk", path.display())]
    PathNotFound { path: PathBuf },

    /// The bundled wiretap API has no build for this host.
    #[error("Unsupported platform '{platform}' for the wiretap API")]
    UnsupportedPlatform { platform: String },

    /// A 2016+ application path outside the install root.
    #[error("Invalid application path '{path}': it needs to start with {root}")]
    InvalidAppPath { path: String, root: String },

    /// The pipeline context could not be serialized.
    #[error("Failed to serialize pipeline context: {0}")]
    ContextSerialization(String),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for launch preparation.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
