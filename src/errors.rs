//! Centralized error handling.
//!
//! Settings construction has a single failure type, [`ConfigError`].
//! Field problems are collected rather than reported one at a time, so a
//! caller sees every missing or malformed key from one load attempt.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What went wrong with a single settings key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required key absent from the environment and the env file
    Missing,

    /// Value present but not coercible to the declared type
    Invalid {
        value: String,
        expected: &'static str,
    },

    /// Key in the env file that is not a settings field
    Unexpected,
}

impl FieldIssue {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FieldIssue::Missing => "MISSING",
            FieldIssue::Invalid { .. } => "INVALID",
            FieldIssue::Unexpected => "UNEXPECTED",
        }
    }
}

/// A problem attached to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: String,
    pub issue: FieldIssue,
}

impl FieldError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            issue: FieldIssue::Missing,
        }
    }

    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self {
            key: key.into(),
            issue: FieldIssue::Invalid {
                value: value.into(),
                expected,
            },
        }
    }

    pub fn unexpected(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            issue: FieldIssue::Unexpected,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issue {
            FieldIssue::Missing => write!(f, "{} is required but not set", self.key),
            FieldIssue::Invalid { value, expected } => {
                write!(f, "{} must be a valid {} (got {:?})", self.key, expected, value)
            }
            FieldIssue::Unexpected => write!(f, "{} is not a recognized setting", self.key),
        }
    }
}

/// Settings construction errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more keys were missing or malformed
    #[error("invalid configuration: {}", join_fields(.0))]
    InvalidFields(Vec<FieldError>),

    /// The env file exists but could not be read or parsed
    #[error("failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Keys named by this error, in the order they were reported
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ConfigError::InvalidFields(errors) => errors.iter().map(|e| e.key.as_str()).collect(),
            ConfigError::EnvFile { .. } => Vec::new(),
        }
    }

    /// Field-level problems, empty for env file failures
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigError::InvalidFields(errors) => errors,
            ConfigError::EnvFile { .. } => &[],
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
