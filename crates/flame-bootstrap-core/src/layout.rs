//! The Flame install layout under `/usr/discreet`.
//!
//! ```text
//! /usr/discreet/
//!   flameassist_2016.0.0.322/     <- application install
//!     bin/startApplication
//!     python/                     <- wiretap API (2016+)
//!   python/2016.0.0.322/          <- per-version interpreter (2016+)
//!     bin/python
//!     lib/
//!   Python-2.6.9/                 <- shared interpreter (2015)
//!     bin/python
//!     lib/
//!   lib64/2016.0.0.322/           <- system libraries
//!     framework/                  (macOS)
//! ```

use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::version::FlameVersion;

/// Default install root for every Flame family product.
pub const DEFAULT_INSTALL_ROOT: &str = "/usr/discreet";

/// The interpreter directory 2015-era releases share.
const LEGACY_PYTHON_DIR: &str = "Python-2.6.9";

/// Path resolution for a Flame install tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlameLayout {
    install_root: PathBuf,
}

impl Default for FlameLayout {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_ROOT)
    }
}

impl FlameLayout {
    pub fn new(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
        }
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// The install root as a string prefix, always ending in `/`.
    pub fn install_prefix(&self) -> String {
        let root = self.install_root.to_string_lossy();
        if root.ends_with('/') {
            root.into_owned()
        } else {
            format!("{root}/")
        }
    }

    fn legacy_python_root(&self) -> PathBuf {
        self.install_root.join(LEGACY_PYTHON_DIR)
    }

    fn versioned_python_root(&self, version: &FlameVersion) -> PathBuf {
        self.install_root.join("python").join(&version.raw)
    }

    /// Interpreter used to run the launcher script.
    pub fn python_binary(&self, version: &FlameVersion) -> PathBuf {
        let root = if version.is_legacy() {
            self.legacy_python_root()
        } else {
            self.versioned_python_root(version)
        };
        root.join("bin").join("python")
    }

    /// Shared libraries of that interpreter.
    pub fn python_lib_dir(&self, version: &FlameVersion) -> PathBuf {
        if version.is_legacy() {
            self.legacy_python_root().join("lib")
        } else {
            self.versioned_python_root(version).join("lib")
        }
    }

    /// System libraries shipped with a release.
    pub fn system_lib_dir(&self, version: &FlameVersion) -> PathBuf {
        self.install_root.join("lib64").join(&version.raw)
    }

    /// macOS frameworks shipped with a release.
    pub fn framework_dir(&self, version: &FlameVersion) -> PathBuf {
        self.system_lib_dir(version).join("framework")
    }

    /// Wiretap API bundled with the engine for 2015-era releases.
    ///
    /// Returns `None` on platforms without a bundled build.
    pub fn bundled_wiretap_dir(engine_root: &Path, platform: &Platform) -> Option<PathBuf> {
        let platform_dir = match platform {
            Platform::Linux => "linux",
            Platform::MacOs => "macosx",
            Platform::Other(_) => return None,
        };
        Some(
            engine_root
                .join("resources")
                .join("wiretap")
                .join("2015")
                .join(platform_dir),
        )
    }

    /// Wiretap API shipped inside a 2016+ application install.
    ///
    /// The install directory is the first path segment below the root, so
    /// `/usr/discreet/flameassist_2016.0.0.322/bin/startApplication` yields
    /// `/usr/discreet/flameassist_2016.0.0.322/python`. Returns `None` when
    /// `app_path` is not below the install root.
    pub fn application_wiretap_dir(&self, app_path: &str) -> Option<PathBuf> {
        let relative = app_path.strip_prefix(&self.install_prefix())?;
        let install_dir = relative.split('/').next().unwrap_or_default();
        Some(self.install_root.join(install_dir).join("python"))
    }
}
