//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{SettingsLoader, DEFAULT_ENV_FILE};

/// Hero Settings - Inspect and validate application configuration
#[derive(Parser, Debug)]
#[command(name = "hero-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env override file path
    #[arg(short, long, global = true, env = "ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Ignore the env override file
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Match variable names ignoring case
    #[arg(long, global = true)]
    pub ignore_case: bool,

    /// Accept env file keys that are not settings
    #[arg(long, global = true)]
    pub allow_unknown: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate settings and show where each value came from
    Check,

    /// Print the loaded settings with secrets redacted
    Show(ShowArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Loader configured from the global flags
    pub fn loader(&self) -> SettingsLoader {
        let loader = SettingsLoader::new()
            .case_sensitive(!self.ignore_case)
            .deny_unknown_file_keys(!self.allow_unknown);

        if self.no_env_file {
            loader.without_env_file()
        } else {
            loader.env_file(&self.env_file)
        }
    }
}
