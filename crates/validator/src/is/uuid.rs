//! RFC 4122 UUID text form with version and variant inspection.

use serde::{Deserialize, Serialize};

// Format: xxxxxxxx-xxxx-Vxxx-Nxxx-xxxxxxxxxxxx
const LEN: usize = 36;
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const VERSION_AT: usize = 14;
const VARIANT_AT: usize = 19;

/// Which UUID version to require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Layout only; the version digit is not checked.
    #[default]
    Any,
    /// Name-based, MD5 (`xxxxxxxx-xxxx-3xxx-...`).
    V3,
    /// Random, with the RFC 4122 variant nibble `8`, `9`, `a` or `b`.
    V4,
    /// Name-based, SHA-1, with the RFC 4122 variant nibble.
    V5,
}

/// Canonical 8-4-4-4-12 hex layout of any version. Hex digits may be in
/// either case.
pub fn uuid(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == LEN
        && b.iter().enumerate().all(|(i, c)| {
            if HYPHENS.contains(&i) {
                *c == b'-'
            } else {
                c.is_ascii_hexdigit()
            }
        })
}

/// Version-3 UUID: version nibble is `3`. The variant is not checked.
pub fn uuid_v3(s: &str) -> bool {
    uuid_version(s, UuidVersion::V3)
}

/// Version-4 UUID with the RFC 4122 variant (`8`, `9`, `a` or `b`).
pub fn uuid_v4(s: &str) -> bool {
    uuid_version(s, UuidVersion::V4)
}

/// Version-5 UUID with the RFC 4122 variant (`8`, `9`, `a` or `b`).
pub fn uuid_v5(s: &str) -> bool {
    uuid_version(s, UuidVersion::V5)
}

/// UUID of the given version.
pub fn uuid_version(s: &str, version: UuidVersion) -> bool {
    if !uuid(s) {
        return false;
    }
    let b = s.as_bytes();
    let rfc_variant = matches!(b[VARIANT_AT], b'8' | b'9' | b'a' | b'b' | b'A' | b'B');
    match version {
        UuidVersion::Any => true,
        UuidVersion::V3 => b[VERSION_AT] == b'3',
        UuidVersion::V4 => b[VERSION_AT] == b'4' && rfc_variant,
        UuidVersion::V5 => b[VERSION_AT] == b'5' && rfc_variant,
    }
}
