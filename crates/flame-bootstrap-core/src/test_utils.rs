//! Process environment isolation for tests.
//!
//! `BootstrapConfig::from_env` reads the `FLAME_BOOTSTRAP_*` variables straight
//! from the process, and cargo runs tests on parallel threads. Tests that
//! touch those variables hold [`ENV_LOCK`] and set or clear them through an
//! [`EnvVarGuard`], so other tests never observe the change.

use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

/// Serializes tests that write the process environment.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores one variable to its previous value, or unsets it, on drop.
///
/// ```ignore
/// let _lock = ENV_LOCK.lock().unwrap();
/// let _root = EnvVarGuard::set(INSTALL_ROOT_VAR, "/tmp/discreet");
/// let _script = EnvVarGuard::remove(LAUNCHER_VAR);
/// ```
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }

    /// Unset `key` so a value from the developer's shell cannot leak in.
    #[allow(unsafe_code)]
    pub fn remove(key: &'static str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: as in `set`.
        unsafe { env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the guard is dropped while ENV_LOCK is still held.
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
