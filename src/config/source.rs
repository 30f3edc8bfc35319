//! Sources of raw key/value pairs.
//!
//! The process environment sits behind [`EnvSource`] so the loader can be
//! driven from a fixed map in tests without touching global state.

use std::collections::HashMap;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::errors::{ConfigError, ConfigResult};

/// A snapshot of environment-style variables.
#[cfg_attr(test, automock)]
pub trait EnvSource {
    /// All variables visible to this source
    fn vars(&self) -> Vec<(String, String)>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    tracing::debug!(key = ?key, "Skipping non-UTF-8 environment variable");
                    None
                }
            })
            .collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// Read `KEY=VALUE` pairs from an env file without exporting them.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_env_file(path: &Path) -> ConfigResult<Option<Vec<(String, String)>>> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "Env file not found, skipping");
            return Ok(None);
        }
        Err(e) => return Err(to_error(e)),
    };

    let pairs = iter.collect::<Result<Vec<_>, _>>().map_err(to_error)?;
    tracing::debug!(path = %path.display(), entries = pairs.len(), "Env file loaded");

    Ok(Some(pairs))
}

/// Index pairs by key.
///
/// Later pairs replace earlier ones. When `case_sensitive` is false keys are
/// folded to ASCII uppercase and an exactly-spelled uppercase key wins over
/// any differently-cased spelling.
pub fn index_vars(pairs: Vec<(String, String)>, case_sensitive: bool) -> HashMap<String, String> {
    if case_sensitive {
        return pairs.into_iter().collect();
    }

    let mut map = HashMap::with_capacity(pairs.len());
    let mut exact = Vec::new();
    for (key, value) in pairs {
        let folded = key.to_ascii_uppercase();
        if folded == key {
            exact.push((folded, value));
        } else {
            map.insert(folded, value);
        }
    }
    map.extend(exact);
    map
}
