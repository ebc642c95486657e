//! Bootstrap configuration.
//!
//! Resolution order for every setting:
//! 1. Explicit override (CLI flag)
//! 2. `FLAME_BOOTSTRAP_*` environment variable (also loaded from `.env`)
//! 3. Built-in default

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{DEFAULT_INSTALL_ROOT, FlameLayout};
use crate::ports::{EnvProvider, SystemEnv};

pub const INSTALL_ROOT_VAR: &str = "FLAME_BOOTSTRAP_INSTALL_ROOT";
pub const ENGINE_ROOT_VAR: &str = "FLAME_BOOTSTRAP_ENGINE_ROOT";
pub const LAUNCHER_VAR: &str = "FLAME_BOOTSTRAP_LAUNCHER";

/// Wrapper script that execs the application from inside the interpreter.
pub const DEFAULT_LAUNCHER_SCRIPT: &str = "app_launcher.py";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A path setting was set to an empty string.
    #[error("{key} cannot be empty")]
    EmptyPath { key: &'static str },

    /// A path setting must be absolute.
    #[error("{key} must be an absolute path, got '{}'", path.display())]
    RelativePath { key: &'static str, path: PathBuf },

    /// The engine root could not be derived from the running executable.
    #[error("Cannot determine engine root from executable location: {0}")]
    NoExecutableDir(String),
}

/// Settings for preparing launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Root of the Flame installs.
    pub install_root: PathBuf,
    /// Engine install root; derived from the executable when unset.
    pub engine_root: Option<PathBuf>,
    /// File name of the wrapper script in the startup directory.
    pub launcher_script: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
            engine_root: None,
            launcher_script: DEFAULT_LAUNCHER_SCRIPT.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Load and validate from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_provider(&SystemEnv)
    }

    /// Load and validate from any environment provider.
    pub fn from_provider(env: &dyn EnvProvider) -> Result<Self, ConfigError> {
        let config = Self::load(env);
        config.validate()?;
        Ok(config)
    }

    /// Read environment values over the defaults without validating them.
    ///
    /// Callers layering overrides on top validate once the final values are
    /// known, so a bad variable that a flag replaces is never reported.
    pub fn load(env: &dyn EnvProvider) -> Self {
        let mut config = Self::default();

        if let Some(root) = env.get(INSTALL_ROOT_VAR) {
            config.install_root = PathBuf::from(root);
        }
        if let Some(root) = env.get(ENGINE_ROOT_VAR) {
            config.engine_root = Some(PathBuf::from(root));
        }
        if let Some(script) = env.get(LAUNCHER_VAR) {
            config.launcher_script = script.to_string_lossy().into_owned();
        }
        config
    }

    /// Apply command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        install_root: Option<PathBuf>,
        engine_root: Option<PathBuf>,
    ) -> Self {
        if let Some(root) = install_root {
            self.install_root = root;
        }
        if let Some(root) = engine_root {
            self.engine_root = Some(root);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_absolute(INSTALL_ROOT_VAR, &self.install_root)?;
        if let Some(root) = &self.engine_root {
            validate_absolute(ENGINE_ROOT_VAR, root)?;
        }
        if self.launcher_script.trim().is_empty() {
            return Err(ConfigError::EmptyPath { key: LAUNCHER_VAR });
        }
        Ok(())
    }

    pub fn layout(&self) -> FlameLayout {
        FlameLayout::new(&self.install_root)
    }

    /// The engine root, falling back to the executable's install location.
    pub fn resolve_engine_root(&self) -> Result<PathBuf, ConfigError> {
        if let Some(root) = &self.engine_root {
            return Ok(root.clone());
        }

        let exe = env::current_exe().map_err(|e| ConfigError::NoExecutableDir(e.to_string()))?;
        engine_root_for_executable(&exe).ok_or_else(|| {
            tracing::warn!("executable {} has no install root", exe.display());
            ConfigError::NoExecutableDir(exe.display().to_string())
        })
    }
}

/// `<engine_root>/bin/flame-bootstrap` -> `<engine_root>`.
fn engine_root_for_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

fn validate_absolute(key: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { key });
    }
    if !path.is_absolute() {
        return Err(ConfigError::RelativePath {
            key,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
