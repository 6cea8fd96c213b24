use std::{collections::HashMap, ffi::OsString};

use tracing::warn;

use crate::ValueProvider;

/// Resolve values from environment variables
///
/// The environment is captured once when the provider is created so every
/// lookup during a replace sees the same values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentProvider {
    vars: HashMap<String, String>,
}

impl EnvironmentProvider {
    /// Capture the current process environment
    pub fn new() -> Self {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Create a provider from raw environment pairs
    ///
    /// Values that aren't valid unicode are kept with invalid sequences
    /// replaced by `U+FFFD`, so a set variable is always found. Names that
    /// aren't valid unicode can never match a placeholder and are skipped.
    pub fn from_vars_os(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let vars = vars
            .into_iter()
            .filter_map(|(name, value)| match name.into_string() {
                Ok(name) => Some((name, value.to_string_lossy().into_owned())),
                Err(name) => {
                    warn!(?name, "skipping environment variable with a non-unicode name");
                    None
                }
            })
            .collect();

        Self { vars }
    }

    /// Create a provider from explicit name/value pairs
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for EnvironmentProvider {
    fn resolve(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
