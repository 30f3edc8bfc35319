//! Hero Settings - Application entry point
//!
//! Loads settings once, then dispatches to the requested command.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hero_settings::{
    cli::{Cli, Commands},
    commands, ConfigError,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let report = match cli.loader().load_report() {
        Ok(report) => report,
        Err(e) => {
            report_config_error(&e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Configuration loaded");

    // Execute command
    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Commands::Check => commands::check::execute(&report, &mut stdout),
        Commands::Show(args) => commands::show::execute(args, report.settings(), &mut stdout),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Log a configuration failure and list the offending keys on stderr
fn report_config_error(err: &ConfigError) {
    tracing::error!("Configuration failed: {}", err);

    for field in err.field_errors() {
        eprintln!("  [{}] {}", field.issue.code(), field);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(log_filter(verbose))
        .init();
}

/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, falling back to `info`
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
