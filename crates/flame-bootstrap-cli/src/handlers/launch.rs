//! Launch command handler.
//!
//! Runs the rewritten command with the planned environment and waits for it.

use std::process::{Command, ExitCode};

use anyhow::Result;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::LaunchArgs;
use crate::error::CliError;
use crate::handlers::build_request;

pub fn execute(ctx: &CliContext, args: &LaunchArgs) -> Result<ExitCode> {
    let request = build_request(args)?;
    let plan = ctx.adapter.prepare(&request).map_err(CliError::from)?;

    let mut command = Command::new(&plan.app_path);
    command.args(&plan.argv);
    plan.env.apply_to(&mut command);

    info!(program = %plan.app_path, args = %plan.app_args, "starting Flame");
    let status = command
        .status()
        .map_err(|e| CliError::Process(format!("failed to start {}: {e}", plan.app_path)))?;

    info!(%status, "Flame exited");
    Ok(ExitCode::from(status_exit_code(status.code())))
}

/// Child exit status as our own; signals and out-of-range codes become 1.
fn status_exit_code(code: Option<i32>) -> u8 {
    code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1)
}
