//! Settings construction.
//!
//! Values are resolved per key from three layers, highest priority first:
//! the injected environment, the env file, then declared defaults. Every
//! field is checked before anything is returned, so a failed load reports
//! all offending keys at once and never yields a partial [`Settings`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::coerce::{parse_bool, parse_int};
use super::constants::{
    is_known_field, DATABASE_URL_ENV, DEBUG_ENV, DEFAULT_DEBUG, DEFAULT_ENV_FILE,
    DEFAULT_JWT_ALGORITHM, DEFAULT_JWT_EXPIRATION_MINUTES, DEFAULT_PROJECT_NAME, ENCRYPTION_KEY_ENV,
    GOOGLE_API_KEY_ENV, JWT_ALGORITHM_ENV, JWT_EXPIRATION_ENV, JWT_SECRET_ENV,
    MIN_JWT_SECRET_LENGTH, PROJECT_NAME_ENV,
};
use super::settings::Settings;
use super::source::{index_vars, read_env_file, EnvSource, ProcessEnv};
use crate::errors::{ConfigError, ConfigResult, FieldError};

/// Which layer supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Environment,
    EnvFile,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::Environment => "environment",
            Origin::EnvFile => "env file",
            Origin::Default => "default",
        };
        f.write_str(label)
    }
}

/// Loaded settings together with where each value came from.
#[derive(Debug, Clone)]
pub struct LoadReport {
    settings: Settings,
    origins: Vec<(&'static str, Origin)>,
    env_file: Option<PathBuf>,
}

impl LoadReport {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Origin of every field, in declaration order
    pub fn origins(&self) -> &[(&'static str, Origin)] {
        &self.origins
    }

    pub fn origin_of(&self, key: &str) -> Option<Origin> {
        self.origins
            .iter()
            .find(|(field, _)| *field == key)
            .map(|(_, origin)| *origin)
    }

    /// Env file that was actually read, if any
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }
}

/// Builds [`Settings`] from an [`EnvSource`] and an optional env file.
#[derive(Debug, Clone)]
pub struct SettingsLoader<S = ProcessEnv> {
    source: S,
    env_file: Option<PathBuf>,
    case_sensitive: bool,
    deny_unknown_file_keys: bool,
}

impl SettingsLoader<ProcessEnv> {
    /// Process environment overlaid on `./.env`.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl Default for SettingsLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> SettingsLoader<S> {
    /// Use `source` in place of the process environment.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            case_sensitive: true,
            deny_unknown_file_keys: true,
        }
    }

    /// Read overrides from `path` instead of `./.env`.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip the env file entirely.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Match keys exactly (default) or ignoring ASCII case.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Reject env file keys that are not settings fields (default), or
    /// ignore them.
    pub fn deny_unknown_file_keys(mut self, deny: bool) -> Self {
        self.deny_unknown_file_keys = deny;
        self
    }

    /// Load and validate settings.
    pub fn load(&self) -> ConfigResult<Settings> {
        self.load_report().map(LoadReport::into_settings)
    }

    /// Load and validate settings, keeping track of value origins.
    pub fn load_report(&self) -> ConfigResult<LoadReport> {
        let env = index_vars(self.source.vars(), self.case_sensitive);

        let (file, env_file) = match &self.env_file {
            Some(path) => match read_env_file(path)? {
                Some(pairs) => (index_vars(pairs, self.case_sensitive), Some(path.clone())),
                None => (HashMap::new(), None),
            },
            None => (HashMap::new(), None),
        };

        let mut layers = Layers {
            env: &env,
            file: &file,
            origins: Vec::new(),
            errors: Vec::new(),
        };

        let project_name = layers.string_or(PROJECT_NAME_ENV, DEFAULT_PROJECT_NAME);
        let database_url = layers.required(DATABASE_URL_ENV);
        let debug = layers.coerced(DEBUG_ENV, "boolean", parse_bool, DEFAULT_DEBUG);
        let encryption_key = layers.required(ENCRYPTION_KEY_ENV);
        let jwt_secret = layers.required(JWT_SECRET_ENV);
        let jwt_algorithm = layers.string_or(JWT_ALGORITHM_ENV, DEFAULT_JWT_ALGORITHM);
        let jwt_expiration = layers.coerced(
            JWT_EXPIRATION_ENV,
            "integer",
            parse_int,
            DEFAULT_JWT_EXPIRATION_MINUTES,
        );
        let google_api_key = layers.required(GOOGLE_API_KEY_ENV);

        if self.deny_unknown_file_keys {
            let mut unknown: Vec<&String> = file.keys().filter(|k| !is_known_field(k)).collect();
            unknown.sort();
            layers.errors.extend(unknown.into_iter().map(FieldError::unexpected));
        }

        let Layers { origins, errors, .. } = layers;

        let settings = match (
            database_url,
            debug,
            encryption_key,
            jwt_secret,
            jwt_expiration,
            google_api_key,
        ) {
            (
                Some(database_url),
                Some(debug),
                Some(encryption_key),
                Some(jwt_secret),
                Some(jwt_expiration),
                Some(google_api_key),
            ) if errors.is_empty() => Settings {
                project_name,
                database_url,
                debug,
                encryption_key,
                jwt_secret,
                jwt_algorithm,
                jwt_expiration,
                google_api_key,
            },
            _ => {
                tracing::debug!(count = errors.len(), "Settings validation failed");
                return Err(ConfigError::InvalidFields(errors));
            }
        };

        if settings.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            tracing::warn!(
                "JWT_SECRET is shorter than {} characters; use a longer secret",
                MIN_JWT_SECRET_LENGTH
            );
        }
        if settings.debug {
            tracing::warn!("DEBUG is enabled; do not run this configuration in production");
        }

        Ok(LoadReport {
            settings,
            origins,
            env_file,
        })
    }
}

/// Per-load lookup state.
struct Layers<'a> {
    env: &'a HashMap<String, String>,
    file: &'a HashMap<String, String>,
    origins: Vec<(&'static str, Origin)>,
    errors: Vec<FieldError>,
}

impl Layers<'_> {
    fn lookup(&mut self, key: &'static str) -> Option<String> {
        let (env, file) = (self.env, self.file);
        let found = env
            .get(key)
            .map(|v| (v, Origin::Environment))
            .or_else(|| file.get(key).map(|v| (v, Origin::EnvFile)));

        match found {
            Some((value, origin)) => {
                tracing::trace!(key, %origin, "Setting resolved");
                self.origins.push((key, origin));
                Some(value.clone())
            }
            None => None,
        }
    }

    fn default_used(&mut self, key: &'static str) {
        tracing::trace!(key, "Setting using default");
        self.origins.push((key, Origin::Default));
    }

    fn required(&mut self, key: &'static str) -> Option<String> {
        let value = self.lookup(key);
        if value.is_none() {
            self.errors.push(FieldError::missing(key));
        }
        value
    }

    fn string_or(&mut self, key: &'static str, default: &str) -> String {
        match self.lookup(key) {
            Some(value) => value,
            None => {
                self.default_used(key);
                default.to_string()
            }
        }
    }

    fn coerced<T>(
        &mut self,
        key: &'static str,
        expected: &'static str,
        parse: fn(&str) -> Option<T>,
        default: T,
    ) -> Option<T> {
        match self.lookup(key) {
            Some(raw) => {
                let parsed = parse(&raw);
                if parsed.is_none() {
                    self.errors.push(FieldError::invalid(key, raw, expected));
                }
                parsed
            }
            None => {
                self.default_used(key);
                Some(default)
            }
        }
    }
}
