//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the production ports are wired into
//! the launch adapter:
//! - `SystemLocator` for the host platform, filesystem and engine root
//! - `SystemEnv` for inherited search paths
//! - `JsonContextSerializer` for the pipeline context

use flame_bootstrap_core::{
    BootstrapConfig, JsonContextSerializer, LaunchAdapter, SystemEnv, SystemLocator,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// The adapter as composed for the CLI.
pub type CliAdapter = LaunchAdapter<SystemLocator, SystemEnv, JsonContextSerializer>;

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Effective configuration after env and flag overrides.
    pub config: BootstrapConfig,
    pub locator: SystemLocator,
    pub adapter: CliAdapter,
}

/// Load configuration and compose the adapter.
///
/// Flags are layered over the environment before anything is validated.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let config = BootstrapConfig::load(&SystemEnv)
        .with_overrides(cli.install_root.clone(), cli.engine_root.clone());
    config.validate()?;

    let engine_root = config.resolve_engine_root()?;
    debug!(
        install_root = %config.install_root.display(),
        engine_root = %engine_root.display(),
        "bootstrap configuration"
    );

    let locator = SystemLocator::new(engine_root);
    let adapter =
        LaunchAdapter::from_config(&config, locator.clone(), SystemEnv, JsonContextSerializer);

    Ok(CliContext {
        config,
        locator,
        adapter,
    })
}
