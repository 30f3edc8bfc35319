//! Environment variable names and defaults.
//!
//! Centralized location for every key the settings loader understands.

// =============================================================================
// Environment Variables
// =============================================================================

/// Human-readable project name
pub const PROJECT_NAME_ENV: &str = "PROJECT_NAME";

/// Database connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Debug mode flag
pub const DEBUG_ENV: &str = "DEBUG";

/// Key used by the application's encryption routines
pub const ENCRYPTION_KEY_ENV: &str = "ENCRYPTION_KEY";

/// JWT signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// JWT signing algorithm name
pub const JWT_ALGORITHM_ENV: &str = "JWT_ALGORITHM";

/// JWT lifetime in minutes
pub const JWT_EXPIRATION_ENV: &str = "JWT_EXPIRATION";

/// Google API key
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Every settings key, in declaration order
pub const FIELD_NAMES: &[&str] = &[
    PROJECT_NAME_ENV,
    DATABASE_URL_ENV,
    DEBUG_ENV,
    ENCRYPTION_KEY_ENV,
    JWT_SECRET_ENV,
    JWT_ALGORITHM_ENV,
    JWT_EXPIRATION_ENV,
    GOOGLE_API_KEY_ENV,
];

/// Keys that have no default
pub const REQUIRED_FIELDS: &[&str] = &[
    DATABASE_URL_ENV,
    ENCRYPTION_KEY_ENV,
    JWT_SECRET_ENV,
    GOOGLE_API_KEY_ENV,
];

/// Keys whose values are never printed
pub const SECRET_FIELDS: &[&str] = REQUIRED_FIELDS;

/// Check if a key is a known settings field
pub fn is_known_field(key: &str) -> bool {
    FIELD_NAMES.contains(&key)
}

// =============================================================================
// Defaults
// =============================================================================

/// Default project name
pub const DEFAULT_PROJECT_NAME: &str = "Hero API";

/// Debug mode is off unless requested
pub const DEFAULT_DEBUG: bool = false;

/// Default JWT signing algorithm
pub const DEFAULT_JWT_ALGORITHM: &str = "HS256";

/// Default JWT lifetime in minutes
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 30;

/// Default override file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Security
// =============================================================================

/// Secrets shorter than this are accepted but logged as weak
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Placeholder rendered instead of secret values
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Coercion
// =============================================================================

/// Accepted truthy forms for boolean fields (compared ASCII case-insensitively)
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "t", "yes", "y", "on"];

/// Accepted falsy forms for boolean fields (compared ASCII case-insensitively)
pub const FALSY_VALUES: &[&str] = &["0", "false", "f", "no", "n", "off"];
