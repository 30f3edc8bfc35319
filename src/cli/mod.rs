//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `check` - Validate settings and report value origins
//! - `show` - Print redacted settings

pub mod args;

pub use args::{Cli, Commands, ShowArgs};
