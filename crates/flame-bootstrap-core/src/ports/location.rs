//! Host and install-location resolution.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Location of the startup resources relative to the engine root.
pub const STARTUP_DIR: &str = "python/startup";

/// Where the launch is happening and where the engine is installed.
#[cfg_attr(test, mockall::automock)]
pub trait LocationResolver {
    /// Platform the application will run on.
    fn platform(&self) -> Platform;

    /// Whether `path` exists on disk.
    fn path_exists(&self, path: &Path) -> bool;

    /// Root of the engine install (holds `resources/` and `python/`).
    fn engine_root(&self) -> PathBuf;

    /// Directory holding the launcher script.
    fn startup_dir(&self) -> PathBuf {
        self.engine_root().join(STARTUP_DIR)
    }
}

/// Production resolver for the machine we are running on.
#[derive(Debug, Clone)]
pub struct SystemLocator {
    platform: Platform,
    engine_root: PathBuf,
}

impl SystemLocator {
    pub fn new(engine_root: impl Into<PathBuf>) -> Self {
        Self {
            platform: Platform::current(),
            engine_root: engine_root.into(),
        }
    }
}

impl LocationResolver for SystemLocator {
    fn platform(&self) -> Platform {
        self.platform.clone()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn engine_root(&self) -> PathBuf {
        self.engine_root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn system_locator_checks_real_files() {
        let temp = tempdir().unwrap();
        let app = temp.path().join("startApplication");
        std::fs::write(&app, b"#!/bin/sh\n").unwrap();

        let locator = SystemLocator::new(temp.path());
        assert!(locator.path_exists(&app));
        assert!(!locator.path_exists(&temp.path().join("missing")));
    }

    #[test]
    fn startup_dir_is_below_engine_root() {
        let locator = SystemLocator::new("/opt/engines/tk-flame/v1.2.3");
        assert_eq!(
            locator.startup_dir(),
            PathBuf::from("/opt/engines/tk-flame/v1.2.3/python/startup")
        );
        assert_eq!(locator.platform(), Platform::current());
    }
}
