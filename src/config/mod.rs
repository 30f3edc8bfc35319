//! Application configuration module
//!
//! Loads typed settings from environment variables and an optional `.env`
//! file, and holds the key names and defaults they are resolved against.

mod coerce;
mod constants;
mod loader;
mod settings;
mod source;

pub use coerce::{parse_bool, parse_int};
pub use constants::*;
pub use loader::{LoadReport, Origin, SettingsLoader};
pub use settings::Settings;
pub use source::{read_env_file, EnvSource, ProcessEnv};
