//! Text-to-value coercion for typed settings.

use super::constants::{FALSY_VALUES, TRUTHY_VALUES};

/// Parse a boolean from its common textual forms.
///
/// Surrounding whitespace is ignored and matching is ASCII case-insensitive.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if TRUTHY_VALUES.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if FALSY_VALUES.iter().any(|f| f.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}

/// Parse a signed base-10 integer, ignoring surrounding whitespace.
///
/// A decimal with an all-zero fractional part (`45.0`) is accepted as the
/// integer it denotes.
pub fn parse_int(raw: &str) -> Option<i64> {
    let value = raw.trim();
    if let Ok(parsed) = value.parse() {
        return Some(parsed);
    }

    let (whole, fraction) = value.split_once('.')?;
    if fraction.is_empty() || !fraction.bytes().all(|b| b == b'0') {
        return None;
    }
    whole.parse().ok()
}
