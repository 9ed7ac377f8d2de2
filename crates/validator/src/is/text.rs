//! Length, pattern and emptiness checks.

use regex::Regex;

/// UTF-8 byte length lies in `min..=max`.
pub fn byte_length(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len())
}

/// Code-point count lies in `min..=max`.
pub fn string_length(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

/// `pattern` matches anywhere in `s`.
///
/// The pattern is compiled on every call; an invalid pattern yields `false`.
/// Anchor it with `^…$` to require a full match.
pub fn matches(s: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(s),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "rejecting invalid pattern");
            false
        }
    }
}

/// The string is empty.
pub fn null(s: &str) -> bool {
    s.is_empty()
}
