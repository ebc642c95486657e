//! Environment provider for reading inherited variables.

use std::ffi::OsString;

/// Read access to the environment the launch inherits.
#[cfg_attr(test, mockall::automock)]
pub trait EnvProvider {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<OsString>;
}

/// Production provider backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}
