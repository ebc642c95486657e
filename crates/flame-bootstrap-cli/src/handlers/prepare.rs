//! Prepare command handler.
//!
//! Prints the rewritten launch so another launcher can run it.

use anyhow::Result;

use flame_bootstrap_core::LaunchPlan;
use flame_bootstrap_core::env::shell_quote;

use crate::bootstrap::CliContext;
use crate::commands::{LaunchArgs, OutputFormat};
use crate::error::CliError;
use crate::handlers::build_request;

pub fn execute(ctx: &CliContext, args: &LaunchArgs, format: OutputFormat) -> Result<()> {
    let request = build_request(args)?;
    let plan = ctx.adapter.prepare(&request).map_err(CliError::from)?;

    let output = match format {
        OutputFormat::Text => render_text(&plan),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Shell => render_shell(&plan),
    };
    print!("{output}");
    Ok(())
}

fn render_text(plan: &LaunchPlan) -> String {
    let mut out = format!(
        "app_path = {}\napp_args = {}\n",
        plan.app_path, plan.app_args
    );
    for (key, value) in plan.env.iter() {
        out.push_str(&format!("{key} = {value}\n"));
    }
    out
}

fn render_shell(plan: &LaunchPlan) -> String {
    let mut out = plan.env.to_shell_exports();
    out.push_str("exec ");
    out.push_str(&shell_quote(&plan.app_path));
    for arg in &plan.argv {
        out.push(' ');
        out.push_str(&shell_quote(arg));
    }
    out.push('\n');
    out
}
