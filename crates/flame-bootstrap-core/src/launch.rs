//! Launch rewriting for Flame.
//!
//! Part of the Flame startup happens outside of Flame, so the launch is
//! routed through Flame's own Python and the `app_launcher.py` wrapper:
//!
//! ```text
//! input:  app_path: /usr/discreet/flame_2015.2/bin/startApplication
//!         app_args: --extra args
//!
//! output: app_path: /usr/discreet/Python-2.6.9/bin/python
//!         app_args: <engine>/python/startup/app_launcher.py
//!                   /usr/discreet/flame_2015.2/bin/startApplication
//!                   --extra args
//! ```
//!
//! The environment the wrapper needs is returned in the plan; nothing is
//! written to the current process.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{BootstrapConfig, DEFAULT_LAUNCHER_SCRIPT};
use crate::env::{
    DYLD_FRAMEWORK_PATH, EnvChanges, LD_LIBRARY_PATH, PYTHONPATH, TOOLKIT_CONTEXT,
    TOOLKIT_ENGINE_NAME, TOOLKIT_FLAME_MAJOR_VERSION, TOOLKIT_FLAME_MINOR_VERSION,
    TOOLKIT_FLAME_PYTHON_BINARY, TOOLKIT_FLAME_VERSION,
};
use crate::error::{BootstrapError, BootstrapResult};
use crate::layout::FlameLayout;
use crate::platform::Platform;
use crate::ports::{ContextSerializer, EnvProvider, LocationResolver, PipelineContext};
use crate::version::FlameVersion;

/// A launch as requested by the launcher app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Engine instance name in the pipeline environment.
    pub engine_instance_name: String,
    pub context: PipelineContext,
    /// Flame executable, e.g. `/usr/discreet/flame_2016/bin/startApplication`.
    pub app_path: String,
    /// Arguments for Flame, passed through verbatim.
    pub app_args: String,
    /// The same arguments as separate entries, when the caller has them.
    ///
    /// Without it `app_args` is split on whitespace to build the argv.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_arg_list: Option<Vec<String>>,
}

impl LaunchRequest {
    /// Request built from already separated arguments.
    ///
    /// `app_args` is their space-joined form; the entries themselves are
    /// kept so arguments containing spaces survive into the plan's argv.
    pub fn from_arg_list(
        engine_instance_name: impl Into<String>,
        context: PipelineContext,
        app_path: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            engine_instance_name: engine_instance_name.into(),
            context,
            app_path: app_path.into(),
            app_args: args.join(" "),
            app_arg_list: Some(args),
        }
    }

    fn arg_list(&self) -> Vec<String> {
        self.app_arg_list.clone().unwrap_or_else(|| {
            self.app_args
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
    }
}

/// The rewritten launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    /// Interpreter to execute instead of Flame.
    pub app_path: String,
    /// Wrapper script, original Flame path and original arguments.
    pub app_args: String,
    /// `app_args` as separate entries for spawning the interpreter.
    pub argv: Vec<String>,
    pub version: FlameVersion,
    /// Variables the launched process must see.
    pub env: EnvChanges,
}

/// Rewrites Flame launches using injected platform, environment and context
/// capabilities.
pub struct LaunchAdapter<L, E, S> {
    layout: FlameLayout,
    launcher_script: String,
    locator: L,
    env: E,
    serializer: S,
}

impl<L, E, S> LaunchAdapter<L, E, S>
where
    L: LocationResolver,
    E: EnvProvider,
    S: ContextSerializer,
{
    pub fn new(layout: FlameLayout, locator: L, env: E, serializer: S) -> Self {
        Self {
            layout,
            launcher_script: DEFAULT_LAUNCHER_SCRIPT.to_string(),
            locator,
            env,
            serializer,
        }
    }

    /// Build an adapter from configuration.
    pub fn from_config(config: &BootstrapConfig, locator: L, env: E, serializer: S) -> Self {
        Self::new(config.layout(), locator, env, serializer)
            .with_launcher_script(config.launcher_script.clone())
    }

    #[must_use]
    pub fn with_launcher_script(mut self, name: impl Into<String>) -> Self {
        self.launcher_script = name.into();
        self
    }

    /// Path of the wrapper script the interpreter runs.
    pub fn launcher_path(&self) -> PathBuf {
        self.locator.startup_dir().join(&self.launcher_script)
    }

    /// Validate the request and compute the rewritten launch.
    pub fn prepare(&self, request: &LaunchRequest) -> BootstrapResult<LaunchPlan> {
        let app_path = request.app_path.as_str();

        let version = FlameVersion::from_app_path(app_path)?;
        if !version.is_supported() {
            return Err(BootstrapError::UnsupportedVersion { version });
        }

        if !self.locator.path_exists(Path::new(app_path)) {
            return Err(BootstrapError::PathNotFound {
                path: PathBuf::from(app_path),
            });
        }

        let platform = self.locator.platform();
        let separator = platform.path_list_separator();
        let mut env = EnvChanges::new();

        env.set(TOOLKIT_ENGINE_NAME, request.engine_instance_name.as_str());
        env.set(
            TOOLKIT_CONTEXT,
            self.serializer.serialize(&request.context)?,
        );

        let wiretap = self.wiretap_dir(app_path, &version, &platform)?;
        debug!(path = %wiretap.display(), "wiretap API location");
        env.prepend_path(PYTHONPATH, &path_str(&wiretap), separator, &self.env);

        self.add_library_paths(&mut env, &version, &platform, separator);

        let python = path_str(&self.layout.python_binary(&version));
        env.set(TOOLKIT_FLAME_PYTHON_BINARY, python.as_str());
        env.set(TOOLKIT_FLAME_MAJOR_VERSION, version.major.to_string());
        env.set(TOOLKIT_FLAME_MINOR_VERSION, version.minor.to_string());
        env.set(TOOLKIT_FLAME_VERSION, version.raw.as_str());

        let launcher = path_str(&self.launcher_path());
        let app_args = format!("{launcher} {app_path} {}", request.app_args);
        let mut argv = vec![launcher, app_path.to_string()];
        argv.extend(request.arg_list());

        info!(
            flame = %version,
            interpreter = %python,
            "rerouting Flame launch through {}",
            self.launcher_script
        );

        Ok(LaunchPlan {
            app_path: python,
            app_args,
            argv,
            version,
            env,
        })
    }

    /// 2015 needs the wiretap build bundled with the engine; 2016 and later
    /// ship a working one next to the application.
    fn wiretap_dir(
        &self,
        app_path: &str,
        version: &FlameVersion,
        platform: &Platform,
    ) -> BootstrapResult<PathBuf> {
        if version.is_legacy() {
            let engine_root = self.locator.engine_root();
            return FlameLayout::bundled_wiretap_dir(&engine_root, platform).ok_or_else(|| {
                BootstrapError::UnsupportedPlatform {
                    platform: platform.to_string(),
                }
            });
        }

        self.layout
            .application_wiretap_dir(app_path)
            .ok_or_else(|| BootstrapError::InvalidAppPath {
                path: app_path.to_string(),
                root: self.layout.install_prefix(),
            })
    }

    /// The dynamic loader fixes library order before any script runs, so the
    /// Qt-compatible libraries have to be hinted here rather than inside Flame.
    fn add_library_paths(
        &self,
        env: &mut EnvChanges,
        version: &FlameVersion,
        platform: &Platform,
        separator: char,
    ) {
        match platform {
            Platform::MacOs => {
                let frameworks = path_str(&self.layout.framework_dir(version));
                debug!(path = %frameworks, "framework search path");
                env.prepend_path(DYLD_FRAMEWORK_PATH, &frameworks, separator, &self.env);
            }
            Platform::Linux => {
                let python_libs = path_str(&self.layout.python_lib_dir(version));
                let system_libs = path_str(&self.layout.system_lib_dir(version));
                debug!(python = %python_libs, system = %system_libs, "library search path");
                env.prepend_path(LD_LIBRARY_PATH, &python_libs, separator, &self.env);
                env.prepend_path(LD_LIBRARY_PATH, &system_libs, separator, &self.env);
            }
            Platform::Other(name) => {
                debug!(platform = %name, "no library search path for platform");
            }
        }
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
