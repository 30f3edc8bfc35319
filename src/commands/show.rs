//! Show command - Prints the loaded settings with secrets redacted.

use std::io::{self, Write};

use crate::cli::ShowArgs;
use crate::config::{Settings, REDACTED};

/// Execute the show command
pub fn execute(args: &ShowArgs, settings: &Settings, out: &mut impl Write) -> io::Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        return writeln!(out);
    }

    let rows: [(&str, String); 8] = [
        ("PROJECT_NAME", settings.project_name().to_string()),
        ("DATABASE_URL", REDACTED.to_string()),
        ("DEBUG", settings.debug().to_string()),
        ("ENCRYPTION_KEY", REDACTED.to_string()),
        ("JWT_SECRET", REDACTED.to_string()),
        ("JWT_ALGORITHM", settings.jwt_algorithm().to_string()),
        ("JWT_EXPIRATION", settings.jwt_expiration_minutes().to_string()),
        ("GOOGLE_API_KEY", REDACTED.to_string()),
    ];

    for (key, value) in rows {
        writeln!(out, "{:<16} {}", key, value)?;
    }
    Ok(())
}
