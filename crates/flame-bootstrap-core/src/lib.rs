//! Launch preparation for Flame under the pipeline toolkit.
//!
//! Given the Flame executable a launcher wants to start, [`LaunchAdapter`]
//! validates the release, works out where the wiretap API and the matching
//! Python live, and returns a [`LaunchPlan`]: the interpreter to run, the
//! arguments for the `app_launcher.py` wrapper, and the environment the
//! wrapper needs.
//!
//! ```no_run
//! use flame_bootstrap_core::{
//!     BootstrapConfig, JsonContextSerializer, LaunchAdapter, LaunchRequest, PipelineContext,
//!     SystemEnv, SystemLocator,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BootstrapConfig::from_env()?;
//! let locator = SystemLocator::new(config.resolve_engine_root()?);
//! let adapter = LaunchAdapter::from_config(&config, locator, SystemEnv, JsonContextSerializer);
//!
//! let plan = adapter.prepare(&LaunchRequest {
//!     engine_instance_name: "tk-flame".to_string(),
//!     context: PipelineContext::default(),
//!     app_path: "/usr/discreet/flame_2016/bin/startApplication".to_string(),
//!     app_args: String::new(),
//!     app_arg_list: None,
//! })?;
//! println!("{} {:?}", plan.app_path, plan.argv);
//! # Ok(())
//! # }
//! ```
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod env;
pub mod error;
pub mod launch;
pub mod layout;
pub mod platform;
pub mod ports;
pub mod version;

#[cfg(test)]
mod test_utils;

pub use config::{BootstrapConfig, ConfigError};
pub use env::EnvChanges;
pub use error::{BootstrapError, BootstrapResult};
pub use launch::{LaunchAdapter, LaunchPlan, LaunchRequest};
pub use layout::{DEFAULT_INSTALL_ROOT, FlameLayout};
pub use platform::Platform;
pub use ports::{
    ContextSerializer, EnvProvider, JsonContextSerializer, LocationResolver, PipelineContext,
    SystemEnv, SystemLocator,
};
pub use version::{FlameVersion, MINIMUM_SUPPORTED};
