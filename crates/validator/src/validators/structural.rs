//! Validators for fixed-layout identifiers and colour notations.

use crate::foundation::ValidationError;
use crate::is::{self, UuidVersion};

// ============================================================================
// UUID
// ============================================================================

const fn uuid_label(version: UuidVersion) -> &'static str {
    match version {
        UuidVersion::Any => "UUID",
        UuidVersion::V3 => "UUID v3",
        UuidVersion::V4 => "UUID v4",
        UuidVersion::V5 => "UUID v5",
    }
}

crate::validator! {
    /// A UUID in the canonical 8-4-4-4-12 layout, optionally pinned to a
    /// version.
    ///
    /// ```
    /// use verity_validator::prelude::*;
    ///
    /// let id = "a987fbc9-4bed-3078-cf07-9141ba07c9f3";
    /// assert!(uuid().validate(id).is_ok());
    /// assert_eq!(
    ///     uuid_v4().validate(id).unwrap_err().param("expected"),
    ///     Some("UUID v4"),
    /// );
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Uuid { version: UuidVersion } for str;
    rule(self, input) { is::uuid_version(input, self.version) }
    error(self, input) { ValidationError::invalid_format(uuid_label(self.version)) }
}

/// Any version.
#[must_use]
pub const fn uuid() -> Uuid {
    Uuid {
        version: UuidVersion::Any,
    }
}

/// Version 3 only.
#[must_use]
pub const fn uuid_v3() -> Uuid {
    Uuid {
        version: UuidVersion::V3,
    }
}

/// Version 4 only.
#[must_use]
pub const fn uuid_v4() -> Uuid {
    Uuid {
        version: UuidVersion::V4,
    }
}

/// Version 5 only.
#[must_use]
pub const fn uuid_v5() -> Uuid {
    Uuid {
        version: UuidVersion::V5,
    }
}

// ============================================================================
// COLOURS
// ============================================================================

crate::validator! {
    /// `#rgb`/`#rrggbb`, the `#` being optional.
    pub HexColor for str;
    rule(input) { is::hex_color(input) }
    error(input) { ValidationError::invalid_format("hex colour") }
    fn hex_color();
}

crate::validator! {
    /// `rgb(r,g,b)` with each channel in 0..=255.
    pub RgbColor for str;
    rule(input) { is::rgb_color(input) }
    error(input) {
        ValidationError::invalid_format("rgb() colour")
            .with_help("channels are 0-255 without leading zeros, e.g. rgb(0,31,255)")
    }
    fn rgb_color();
}

// ============================================================================
// SEMVER
// ============================================================================

crate::validator! {
    pub Semver for str;
    rule(input) { is::semver(input) }
    error(input) { ValidationError::invalid_format("semantic version") }
    fn semver();
}
