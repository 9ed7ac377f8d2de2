//! Checksum validators: Luhn for payment cards, mod-11 / mod-10 for ISBNs.
//!
//! Each validator first reduces its input to a sanitised digit sequence,
//! checks the shape, then runs the arithmetic. The sanitised sequence never
//! escapes the function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::patterns;

// ============================================================================
// LUHN
// ============================================================================

/// Payment card number with a valid Luhn check digit.
///
/// Every non-digit character is stripped first, so `"4716-2210-5188-5662"`
/// and `"4929 7226 5379 7141"` are checked as their bare digits. The
/// remainder must be 12 to 19 digits long.
///
/// # Examples
///
/// ```
/// use verity_validator::is;
///
/// assert!(is::credit_card("4716461583322103"));
/// assert!(is::credit_card("4716-2210-5188-5662"));
/// assert!(!is::credit_card("5398228707871528"));
/// ```
pub fn credit_card(s: &str) -> bool {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    patterns::CREDIT_CARD.is_match(&digits) && luhn(digits.as_bytes())
}

/// Luhn sum over ASCII digits, walking right to left and doubling every
/// second digit starting from the second-to-last.
fn luhn(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

// ============================================================================
// ISBN
// ============================================================================

/// Which ISBN checksum rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsbnVersion {
    /// Ten characters, mod-11 checksum, `X` stands for ten.
    V10,
    /// Thirteen digits, alternating 1/3 weights, mod-10 checksum.
    V13,
    /// Accept either form.
    #[default]
    Either,
}

impl IsbnVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V10 => "10",
            Self::V13 => "13",
            Self::Either => "any",
        }
    }
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`IsbnVersion`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ISBN version `{0}` (expected 10, 13 or any)")]
pub struct UnknownIsbnVersion(pub String);

impl FromStr for IsbnVersion {
    type Err = UnknownIsbnVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10" => Ok(Self::V10),
            "13" => Ok(Self::V13),
            "any" | "either" => Ok(Self::Either),
            other => Err(UnknownIsbnVersion(other.to_owned())),
        }
    }
}

/// ISBN of the requested version.
///
/// ASCII whitespace and hyphens are ignored, so `"978-4-87311-368-5"` and
/// `"3 401 01319 X"` are checked as their bare characters.
pub fn isbn(s: &str, version: IsbnVersion) -> bool {
    let sanitized: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b'-')
        .collect();
    match version {
        IsbnVersion::V10 => isbn10_digits(&sanitized),
        IsbnVersion::V13 => isbn13_digits(&sanitized),
        IsbnVersion::Either => isbn10_digits(&sanitized) || isbn13_digits(&sanitized),
    }
}

/// Shorthand for [`isbn`] with [`IsbnVersion::V10`].
pub fn isbn10(s: &str) -> bool {
    isbn(s, IsbnVersion::V10)
}

/// Shorthand for [`isbn`] with [`IsbnVersion::V13`].
pub fn isbn13(s: &str) -> bool {
    isbn(s, IsbnVersion::V13)
}

fn isbn10_digits(b: &[u8]) -> bool {
    let [body @ .., last] = b else {
        return false;
    };
    if body.len() != 9 || !body.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let check = match *last {
        b'X' => 10,
        d if d.is_ascii_digit() => u32::from(d - b'0'),
        _ => return false,
    };
    let sum: u32 = body
        .iter()
        .zip(1u32..)
        .map(|(&d, weight)| weight * u32::from(d - b'0'))
        .sum::<u32>()
        + 10 * check;
    sum % 11 == 0
}

fn isbn13_digits(b: &[u8]) -> bool {
    if b.len() != 13 || !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let sum: u32 = b[..12]
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            weight * u32::from(d - b'0')
        })
        .sum();
    (10 - sum % 10) % 10 == u32::from(b[12] - b'0')
}
