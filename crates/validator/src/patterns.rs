//! Process-wide compiled patterns.
//!
//! Every structural regex used by the predicates lives here as a
//! [`LazyLock`] static: compiled once on first use and shared read-only by
//! all callers. The `regex` crate matches in linear time, so these are safe
//! to run against untrusted input.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Large Unicode classes in the URL grammar need more room than the default
/// compiled-program budget.
const URL_SIZE_LIMIT: usize = 1 << 24;

fn compile(name: &'static str, pattern: &str) -> Regex {
    tracing::trace!(pattern = name, "compiling format pattern");
    // Patterns are string constants; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern `{name}` is invalid: {e}"))
}

// ============================================================================
// UNICODE CATEGORIES
// ============================================================================

/// Every code point is in general category L.
pub(crate) static UTF_LETTER: LazyLock<Regex> =
    LazyLock::new(|| compile("utf_letter", r"^\p{L}*$"));

/// Every code point is in category L or N.
pub(crate) static UTF_LETTER_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| compile("utf_letter_numeric", r"^[\p{L}\p{N}]*$"));

/// Every code point is in category N (Nd, Nl, No).
pub(crate) static UTF_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| compile("utf_numeric", r"^\p{N}*$"));

/// Every code point is a decimal digit (category Nd).
pub(crate) static UTF_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| compile("utf_digit", r"^\p{Nd}*$"));

// ============================================================================
// STRUCTURAL FORMATS
// ============================================================================

/// Shape of a sanitised card number.
pub(crate) static CREDIT_CARD: LazyLock<Regex> =
    LazyLock::new(|| compile("credit_card", r"^[0-9]{12,19}$"));

/// `rgb(R, G, B)` with channels in 0..=255 and no leading zeros.
pub(crate) static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    const CHANNEL: &str = r"(?:0|[1-9][0-9]?|1[0-9]{2}|2[0-4][0-9]|25[0-5])";
    compile(
        "rgb_color",
        &format!(r"^rgb\(\s*{CHANNEL}\s*,\s*{CHANNEL}\s*,\s*{CHANNEL}\s*\)$"),
    )
});

pub(crate) static SSN: LazyLock<Regex> =
    LazyLock::new(|| compile("ssn", r"^[0-9]{3}[- ][0-9]{2}[- ][0-9]{4}$"));

/// SemVer 2.0.0 with an optional leading `v`.
pub(crate) static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    const NUM: &str = r"(?:0|[1-9][0-9]*)";
    const PRE_ID: &str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";
    const BUILD_ID: &str = r"[0-9a-zA-Z-]+";
    compile(
        "semver",
        &format!(
            r"^v?{NUM}\.{NUM}\.{NUM}(?:-{PRE_ID}(?:\.{PRE_ID})*)?(?:\+{BUILD_ID}(?:\.{BUILD_ID})*)?$"
        ),
    )
});

// ============================================================================
// NETWORK
// ============================================================================

/// Labels of ASCII letters, digits and hyphens, 1..=63 long, not starting
/// with a hyphen. A trailing dot (FQDN) is allowed.
pub(crate) static DNS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "dns_name",
        r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,62}(?:\.[a-zA-Z0-9][a-zA-Z0-9-]{0,62})*\.?$",
    )
});

/// Structural URL grammar: optional scheme (ftp, http, https), optional
/// userinfo, IPv4 or host name with optional TLD, optional port and path.
pub(crate) static URL: LazyLock<Regex> = LazyLock::new(|| {
    const SCHEME: &str = r"(?:(?:ftp|https?)://)";
    const USERINFO: &str = r"(?:\S+(?::\S*)?@)";
    const IPV4: &str = r"(?:(?:[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])(?:\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}\.(?:[0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))";
    const HOST: &str = r"(?:(?:[a-zA-Z0-9]+(?:[-.][a-zA-Z0-9]+)*)|(?:www\.))?(?:[a-zA-Z\x{00a1}-\x{ffff}0-9]+-?-?)*[a-zA-Z\x{00a1}-\x{ffff}0-9]+(?:\.[a-zA-Z\x{00a1}-\x{ffff}]{2,})?";
    const PORT: &str = r"(?::[0-9]{1,5})";
    const PATH: &str = r"(?:[/?#]\S*)";

    let pattern = format!(r"^{SCHEME}?{USERINFO}?(?:{IPV4}|{HOST}){PORT}?{PATH}?$");
    tracing::trace!(pattern = "url", "compiling format pattern");
    RegexBuilder::new(&pattern)
        .size_limit(URL_SIZE_LIMIT)
        .build()
        .unwrap_or_else(|e| panic!("built-in pattern `url` is invalid: {e}"))
});

// ============================================================================
// ENCODINGS & PATHS
// ============================================================================

pub(crate) static DATA_URI: LazyLock<Regex> =
    LazyLock::new(|| compile("data_uri", r"^data:.+/(.+);base64$"));

/// Drive-letter absolute path with backslash separators.
pub(crate) static WIN_PATH: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "win_path",
        r#"^[a-zA-Z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*$"#,
    )
});

pub(crate) static UNIX_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile("unix_path", r"^(?:/[^/\x00]*)+/?$"));
