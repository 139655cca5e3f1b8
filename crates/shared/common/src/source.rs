//! Raw key/value resolution from the environment and an override file.
//!
//! Process environment values take precedence; the override file only
//! supplies keys the environment leaves unset. Keys are case-insensitive
//! and stored upper-cased.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Resolved raw configuration values.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
    override_file: Option<PathBuf>,
}

impl EnvSource {
    /// Resolve from the current process environment plus `env_file`.
    pub fn from_process(env_file: &Path) -> ConfigResult<Self> {
        let env = std::env::vars_os().filter_map(|(key, value)| unicode_pair(key, value));
        Self::from_parts(env, env_file)
    }

    /// Resolve from an explicit environment plus `env_file`.
    ///
    /// A missing `env_file` is not an error.
    pub fn from_parts<I, K, V>(env: I, env_file: &Path) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut source = Self::default();

        if env_file.exists() {
            let entries = dotenvy::from_path_iter(env_file)
                .map_err(|e| ConfigError::override_file(env_file, e))?;
            let mut count = 0usize;
            for entry in entries {
                let (key, value) = entry.map_err(|e| ConfigError::override_file(env_file, e))?;
                source.insert(&key, value);
                count += 1;
            }
            tracing::debug!(path = %env_file.display(), keys = count, "Override file loaded");
            source.override_file = Some(env_file.to_path_buf());
        } else {
            tracing::debug!(path = %env_file.display(), "No override file, using environment only");
        }

        for (key, value) in env {
            source.insert(key.as_ref(), value);
        }

        Ok(source)
    }

    /// Build from key/value pairs only.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut source = Self::default();
        for (key, value) in pairs {
            source.insert(key.as_ref(), value);
        }
        source
    }

    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.vars.insert(key.to_ascii_uppercase(), value.into());
    }

    /// Raw value for `key`, if any source provided one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&key.to_ascii_uppercase()).map(String::as_str)
    }

    /// Path of the override file that contributed values, if one existed.
    pub fn override_file(&self) -> Option<&Path> {
        self.override_file.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn unicode_pair(key: OsString, value: OsString) -> Option<(String, String)> {
    Some((key.into_string().ok()?, value.into_string().ok()?))
}
