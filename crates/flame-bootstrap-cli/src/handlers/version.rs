//! Version command handler.

use anyhow::Result;

use flame_bootstrap_core::{FlameVersion, MINIMUM_SUPPORTED};

use crate::error::CliError;

/// Print the version encoded in `app_path`.
pub fn execute(app_path: &str) -> Result<()> {
    let version = FlameVersion::from_app_path(app_path).map_err(CliError::from)?;
    print!("{}", render(&version));
    Ok(())
}

fn render(version: &FlameVersion) -> String {
    format!(
        "version = {}\nmajor = {}\nminor = {}\nsupported = {} (minimum {}.{})\n",
        version.raw,
        version.major,
        version.minor,
        version.is_supported(),
        MINIMUM_SUPPORTED.0,
        MINIMUM_SUPPORTED.1
    )
}
