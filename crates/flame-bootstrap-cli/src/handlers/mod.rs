//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Turn CLI input into a `LaunchRequest`
//! 2. Call the composed `LaunchAdapter`
//! 3. Format output for the terminal

pub mod launch;
pub mod paths;
pub mod prepare;
pub mod version;

use std::fs;

use flame_bootstrap_core::{LaunchRequest, PipelineContext};

use crate::commands::LaunchArgs;
use crate::error::CliError;

/// Build the adapter input from launch arguments.
pub fn build_request(args: &LaunchArgs) -> Result<LaunchRequest, CliError> {
    let context = match (&args.context, &args.context_file) {
        (Some(json), _) => PipelineContext::from_json(json)?,
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            PipelineContext::from_json(&text)?
        }
        (None, None) => PipelineContext::default(),
    };

    Ok(LaunchRequest::from_arg_list(
        args.engine.as_str(),
        context,
        args.app_path.as_str(),
        args.app_args.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args() -> LaunchArgs {
        LaunchArgs {
            engine: "tk-flame".to_string(),
            context: None,
            context_file: None,
            app_path: "/usr/discreet/flame_2016/bin/startApplication".to_string(),
            app_args: vec!["--start-project".to_string(), "demo".to_string()],
        }
    }

    #[test]
    fn inline_context_is_parsed() {
        let mut args = args();
        args.context = Some(r#"{"project": 65}"#.to_string());

        let request = build_request(&args).unwrap();
        assert_eq!(request.context.as_value()["project"], 65);
        assert_eq!(request.app_args, "--start-project demo");
    }

    #[test]
    fn arguments_stay_separate() {
        let mut args = args();
        args.app_args = vec!["--project".to_string(), "My Project".to_string()];

        let request = build_request(&args).unwrap();
        assert_eq!(request.app_args, "--project My Project");
        assert_eq!(
            request.app_arg_list.as_deref(),
            Some(&["--project".to_string(), "My Project".to_string()][..])
        );
    }

    #[test]
    fn context_file_is_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("context.json");
        fs::write(&file, r#"{"task": {"id": 7}}"#).unwrap();

        let mut args = args();
        args.context_file = Some(file);

        let request = build_request(&args).unwrap();
        assert_eq!(request.context.as_value()["task"]["id"], 7);
    }

    #[test]
    fn missing_context_file_is_io_error() {
        let mut args = args();
        args.context_file = Some(PathBuf::from("/nonexistent/context.json"));

        let err = build_request(&args).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn no_context_is_null() {
        let request = build_request(&args()).unwrap();
        assert!(request.context.as_value().is_null());
    }
}
