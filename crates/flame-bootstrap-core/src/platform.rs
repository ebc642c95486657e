//! Host platform detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The operating system a launch is being prepared for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    /// Any other OS, by its `std::env::consts::OS` name.
    Other(String),
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name onto a platform.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// Separator for path-list variables such as `PYTHONPATH`.
    pub fn path_list_separator(&self) -> char {
        match self {
            Self::Other(name) if name == "windows" => ';',
            _ => ':',
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::MacOs => f.write_str("macos"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
