//! Hero Settings - Typed application configuration
//!
//! Loads the Hero API settings from the process environment, overlaid on an
//! optional `.env` file, validates them, and hands back an immutable
//! [`Settings`] value. Construct it once at startup and pass it to the
//! components that need it.
//!
//! # Layers
//!
//! - **config**: Settings, loader, key names and defaults
//! - **errors**: Configuration error types
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//!
//! # Usage
//!
//! ```no_run
//! use hero_settings::SettingsLoader;
//!
//! let settings = SettingsLoader::new().env_file(".env").load()?;
//! println!("{}", settings.project_name());
//! # Ok::<(), hero_settings::ConfigError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{LoadReport, Origin, Settings, SettingsLoader};
pub use errors::{ConfigError, ConfigResult, FieldError, FieldIssue};
