//! Application settings loaded from environment variables.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::constants::REDACTED;
use super::loader::SettingsLoader;
use crate::errors::ConfigResult;

/// Validated application settings.
///
/// Built once at startup by [`SettingsLoader`] and passed by reference to
/// whatever needs it. Fields are private so the value cannot change after
/// construction.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    pub(crate) project_name: String,
    #[serde(serialize_with = "redact")]
    pub(crate) database_url: String,
    pub(crate) debug: bool,
    #[serde(serialize_with = "redact")]
    pub(crate) encryption_key: String,
    #[serde(serialize_with = "redact")]
    pub(crate) jwt_secret: String,
    pub(crate) jwt_algorithm: String,
    pub(crate) jwt_expiration: i64,
    #[serde(serialize_with = "redact")]
    pub(crate) google_api_key: String,
}

fn redact<T: ?Sized, S: Serializer>(_: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("project_name", &self.project_name)
            .field("database_url", &REDACTED)
            .field("debug", &self.debug)
            .field("encryption_key", &REDACTED)
            .field("jwt_secret", &REDACTED)
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("jwt_expiration", &self.jwt_expiration)
            .field("google_api_key", &REDACTED)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment and `./.env`.
    pub fn from_env() -> ConfigResult<Self> {
        SettingsLoader::new().load()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Algorithm name exactly as configured
    pub fn jwt_algorithm(&self) -> &str {
        &self.jwt_algorithm
    }

    /// Parse the configured algorithm name.
    ///
    /// Loading never rejects an algorithm name; consumers that sign tokens
    /// call this and decide how to handle an unknown one.
    pub fn jwt_algorithm_kind(
        &self,
    ) -> Result<jsonwebtoken::Algorithm, jsonwebtoken::errors::Error> {
        jsonwebtoken::Algorithm::from_str(&self.jwt_algorithm)
    }

    /// Token lifetime in minutes, as configured
    pub fn jwt_expiration_minutes(&self) -> i64 {
        self.jwt_expiration
    }

    /// Token lifetime as a duration; `None` if it does not fit one.
    pub fn jwt_expiration(&self) -> Option<chrono::Duration> {
        chrono::Duration::try_minutes(self.jwt_expiration)
    }

    pub fn google_api_key(&self) -> &str {
        &self.google_api_key
    }
}
