//! Paths command handler.
//!
//! Displays the resolved install and engine locations for diagnostics.

use anyhow::Result;

use flame_bootstrap_core::LocationResolver;

use crate::bootstrap::CliContext;

/// Execute the paths command in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("install_root = {}", ctx.config.install_root.display());
    println!("engine_root = {}", ctx.locator.engine_root().display());
    println!("startup_dir = {}", ctx.locator.startup_dir().display());
    println!("launcher_script = {}", ctx.adapter.launcher_path().display());
    println!("platform = {}", ctx.locator.platform());
    Ok(())
}
