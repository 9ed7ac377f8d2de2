//! Fixed-shape identifiers.

use crate::patterns;

/// MongoDB ObjectId: exactly 24 hex characters.
pub fn mongo_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// US Social Security number, `DDD-DD-DDDD` or `DDD DD DDDD`.
///
/// Both separators must be present; mixing `-` and space is allowed.
pub fn ssn(s: &str) -> bool {
    s.len() == 11 && patterns::SSN.is_match(s)
}

/// Parses as a signed 64-bit hexadecimal integer (no `0x` prefix).
pub fn hexadecimal(s: &str) -> bool {
    i64::from_str_radix(s, 16).is_ok()
}
