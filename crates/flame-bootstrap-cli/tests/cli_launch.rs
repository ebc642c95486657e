//! Runs `flame-bootstrap launch` against a fake install tree.
//!
//! Kept in its own test binary: the interpreter stand-in is written and then
//! executed, and a concurrent fork from another test could hold its write
//! handle open (ETXTBSY).

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::Command;

use tempfile::tempdir;

/// Prints what Flame's interpreter would see, then fails with a known code.
const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "version=$TOOLKIT_FLAME_VERSION"
echo "engine=$TOOLKIT_ENGINE_NAME"
for arg in "$@"; do
    echo "arg=$arg"
done
exit 3
"#;

#[test]
fn launch_runs_interpreter_with_plan_environment() {
    let install = tempdir().unwrap();
    let root = install.path();

    let app_dir = root.join("flame_2017.1").join("bin");
    fs::create_dir_all(&app_dir).unwrap();
    let app = app_dir.join("startApplication");
    fs::write(&app, b"#!/bin/sh\n").unwrap();

    let python_dir = root.join("python").join("2017.1").join("bin");
    fs::create_dir_all(&python_dir).unwrap();
    let python = python_dir.join("python");
    fs::write(&python, FAKE_PYTHON).unwrap();
    fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

    let app = app.to_string_lossy().into_owned();
    let out = Command::new(env!("CARGO_BIN_EXE_flame-bootstrap"))
        .args([
            "--install-root",
            &root.to_string_lossy(),
            "--engine-root",
            "/opt/My Engines/tk-flame",
            "launch",
            "--engine",
            "tk-flame-review",
            &app,
            "--",
            "--project",
            "My Project",
        ])
        .current_dir(root)
        .env_remove("FLAME_BOOTSTRAP_INSTALL_ROOT")
        .env_remove("FLAME_BOOTSTRAP_ENGINE_ROOT")
        .env_remove("FLAME_BOOTSTRAP_LAUNCHER")
        .env_remove("TOOLKIT_FLAME_VERSION")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run flame-bootstrap");

    assert_eq!(
        out.status.code(),
        Some(3),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "version=2017.1".to_string(),
            "engine=tk-flame-review".to_string(),
            "arg=/opt/My Engines/tk-flame/python/startup/app_launcher.py".to_string(),
            format!("arg={app}"),
            "arg=--project".to_string(),
            "arg=My Project".to_string(),
        ]
    );
}
