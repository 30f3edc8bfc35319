//! Check command - Reports each setting and the layer that supplied it.

use std::io::{self, Write};

use crate::config::{LoadReport, SECRET_FIELDS};

/// Execute the check command
pub fn execute(report: &LoadReport, out: &mut impl Write) -> io::Result<()> {
    match report.env_file() {
        Some(path) => writeln!(out, "env file: {}", path.display())?,
        None => writeln!(out, "env file: none")?,
    }

    for (key, origin) in report.origins() {
        let marker = if SECRET_FIELDS.contains(key) {
            " (secret)"
        } else {
            ""
        };
        writeln!(out, "{:<16} {}{}", key, origin, marker)?;
    }

    writeln!(out, "OK: {} settings valid", report.origins().len())
}
