//! Staged environment changes for a launch.
//!
//! The adapter never touches the process environment. It records what the
//! launched process needs in an [`EnvChanges`] and the caller decides how to
//! apply it (a child `Command`, shell exports, ...).

use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::ports::EnvProvider;

/// Engine instance to start inside Flame.
pub const TOOLKIT_ENGINE_NAME: &str = "TOOLKIT_ENGINE_NAME";
/// Serialized pipeline context.
pub const TOOLKIT_CONTEXT: &str = "TOOLKIT_CONTEXT";
pub const PYTHONPATH: &str = "PYTHONPATH";
pub const LD_LIBRARY_PATH: &str = "LD_LIBRARY_PATH";
pub const DYLD_FRAMEWORK_PATH: &str = "DYLD_FRAMEWORK_PATH";
/// Interpreter the engine should use once Flame is running.
pub const TOOLKIT_FLAME_PYTHON_BINARY: &str = "TOOLKIT_FLAME_PYTHON_BINARY";
pub const TOOLKIT_FLAME_MAJOR_VERSION: &str = "TOOLKIT_FLAME_MAJOR_VERSION";
pub const TOOLKIT_FLAME_MINOR_VERSION: &str = "TOOLKIT_FLAME_MINOR_VERSION";
pub const TOOLKIT_FLAME_VERSION: &str = "TOOLKIT_FLAME_VERSION";

/// Ordered set of environment variables to hand to the launched process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvChanges {
    vars: Vec<(String, String)>,
}

impl EnvChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any staged value but keeping its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    /// Prepend `path` to a path-list variable.
    ///
    /// The existing value is the one already staged here, otherwise the one
    /// `env` reports. Existing entries are kept even when they equal `path`.
    pub fn prepend_path(
        &mut self,
        key: &str,
        path: &str,
        separator: char,
        env: &dyn EnvProvider,
    ) {
        let current = self.get(key).map(str::to_string).or_else(|| {
            env.get(key)
                .map(|value| value.to_string_lossy().into_owned())
        });

        let value = match current {
            Some(existing) if !existing.is_empty() => format!("{path}{separator}{existing}"),
            _ => path.to_string(),
        };
        self.set(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Apply every staged variable to a child process.
    pub fn apply_to(&self, command: &mut Command) {
        command.envs(self.iter());
    }

    /// Render as `export KEY='value'` lines for a POSIX shell.
    pub fn to_shell_exports(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("export {key}={}\n", shell_quote(value)))
            .collect()
    }
}

/// Single-quote a value for a POSIX shell.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockEnvProvider;
    use std::ffi::{OsStr, OsString};

    fn empty_env() -> MockEnvProvider {
        let mut env = MockEnvProvider::new();
        env.expect_get().returning(|_| None);
        env
    }

    #[test]
    fn set_keeps_insertion_order() {
        let mut changes = EnvChanges::new();
        changes.set("B", "1");
        changes.set("A", "2");
        changes.set("B", "3");

        let pairs: Vec<_> = changes.iter().collect();
        assert_eq!(pairs, vec![("B", "3"), ("A", "2")]);
    }

    #[test]
    fn prepend_onto_unset_is_just_the_path() {
        let mut changes = EnvChanges::new();
        changes.prepend_path(PYTHONPATH, "/wiretap", ':', &empty_env());
        assert_eq!(changes.get(PYTHONPATH), Some("/wiretap"));
    }

    #[test]
    fn prepend_onto_inherited_value() {
        let mut env = MockEnvProvider::new();
        env.expect_get()
            .withf(|key| key == PYTHONPATH)
            .returning(|_| Some(OsString::from("/site:/more")));

        let mut changes = EnvChanges::new();
        changes.prepend_path(PYTHONPATH, "/wiretap", ':', &env);
        assert_eq!(changes.get(PYTHONPATH), Some("/wiretap:/site:/more"));
    }

    #[test]
    fn prepend_stacks_on_staged_value_and_keeps_duplicates() {
        let mut env = MockEnvProvider::new();
        env.expect_get()
            .times(1)
            .returning(|_| Some(OsString::from("/inherited")));

        let mut changes = EnvChanges::new();
        changes.prepend_path(LD_LIBRARY_PATH, "/a", ':', &env);
        changes.prepend_path(LD_LIBRARY_PATH, "/b", ':', &env);
        changes.prepend_path(LD_LIBRARY_PATH, "/a", ':', &env);

        assert_eq!(changes.get(LD_LIBRARY_PATH), Some("/a:/b:/a:/inherited"));
    }

    #[test]
    fn empty_inherited_value_counts_as_unset() {
        let mut env = MockEnvProvider::new();
        env.expect_get().returning(|_| Some(OsString::new()));

        let mut changes = EnvChanges::new();
        changes.prepend_path(PYTHONPATH, "/wiretap", ';', &env);
        assert_eq!(changes.get(PYTHONPATH), Some("/wiretap"));
    }

    #[test]
    fn shell_exports_quote_values() {
        let mut changes = EnvChanges::new();
        changes.set("TOOLKIT_CONTEXT", r#"{"name":"it's"}"#);
        changes.set("TOOLKIT_FLAME_VERSION", "2016");

        assert_eq!(
            changes.to_shell_exports(),
            "export TOOLKIT_CONTEXT='{\"name\":\"it'\\''s\"}'\nexport TOOLKIT_FLAME_VERSION='2016'\n"
        );
    }

    #[test]
    fn serializes_as_ordered_pairs() {
        let mut changes = EnvChanges::new();
        changes.set("Z", "1");
        changes.set("A", "2");
        let json = serde_json::to_string(&changes).unwrap();
        assert_eq!(json, r#"[["Z","1"],["A","2"]]"#);
    }

    #[test]
    fn applied_to_child_command() {
        let mut changes = EnvChanges::new();
        changes.set(TOOLKIT_FLAME_VERSION, "2017.1");
        changes.set(PYTHONPATH, "/usr/discreet/flame_2017.1/python");

        let mut command = Command::new("/usr/discreet/python/2017.1/bin/python");
        changes.apply_to(&mut command);

        let envs: Vec<_> = command.get_envs().collect();
        assert_eq!(
            envs,
            vec![
                (
                    OsStr::new(PYTHONPATH),
                    Some(OsStr::new("/usr/discreet/flame_2017.1/python"))
                ),
                (
                    OsStr::new(TOOLKIT_FLAME_VERSION),
                    Some(OsStr::new("2017.1"))
                ),
            ]
        );
    }
}
