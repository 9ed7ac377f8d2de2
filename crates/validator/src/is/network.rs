//! Network-facing formats: e-mail, URLs, IP and MAC addresses, DNS names.
//!
//! Most of these delegate the heavy lifting to a parser (`url`, `std::net`)
//! and coerce any parse error to `false`.

use std::net::IpAddr;

use url::{ParseError, Url};

use crate::patterns;

// ============================================================================
// E-MAIL
// ============================================================================

/// Contains an `@` that is neither the first nor the last character.
///
/// This is intentionally permissive: quoted local parts, unusual characters
/// and non-ASCII domains all pass.
pub fn email(s: &str) -> bool {
    s.contains('@') && !s.starts_with('@') && !s.ends_with('@')
}

// ============================================================================
// URL
// ============================================================================

/// Longest URL accepted (exclusive), matching common browser limits.
const URL_MAX_LEN: usize = 2083;

/// Web-style URL, with or without a scheme.
///
/// Scheme, when present, must be `http`, `https` or `ftp`. Bare hosts such
/// as `foobar.com` are accepted; bare words like `google` are not.
///
/// # Examples
///
/// ```
/// use verity_validator::is;
///
/// assert!(is::url("http://foobar.com/?foo=bar#baz=qux"));
/// assert!(is::url("foobar.com"));
/// assert!(!is::url("xyz://foobar.com"));
/// assert!(!is::url("http://www.foo_bar.com/"));
/// ```
pub fn url(s: &str) -> bool {
    if s.len() <= 3 || s.len() >= URL_MAX_LEN || s.starts_with('.') {
        return false;
    }

    let (host, path) = match Url::parse(s) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default().to_owned();
            // Opaque URLs (`mailto:…`) have no hierarchical path.
            let path = if parsed.cannot_be_a_base() {
                String::new()
            } else {
                parsed.path().to_owned()
            };
            (host, path)
        }
        Err(ParseError::RelativeUrlWithoutBase) => {
            let end = s.find(['?', '#']).unwrap_or(s.len());
            (String::new(), s[..end].to_owned())
        }
        Err(_) => return false,
    };

    if host.starts_with('.') {
        return false;
    }
    if host.is_empty() && !path.is_empty() && !path.contains('.') {
        return false;
    }
    patterns::URL.is_match(s)
}

/// Parses `s` as an absolute URI, refusing the surrounding whitespace and
/// control characters that `Url::parse` would otherwise silently strip.
fn parse_absolute(s: &str) -> Option<Url> {
    if s.is_empty()
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.bytes().any(|b| b.is_ascii_control())
    {
        return None;
    }
    Url::parse(s).ok()
}

/// Absolute URI as it would appear in an HTTP request line, with a scheme.
///
/// Unlike [`url`], any scheme is accepted and host names are not checked
/// beyond what the URL parser requires.
pub fn request_url(s: &str) -> bool {
    parse_absolute(s).is_some_and(|u| !u.scheme().is_empty())
}

/// Absolute URI or absolute path (`/…`) as it would appear in an HTTP
/// request line.
pub fn request_uri(s: &str) -> bool {
    if s.starts_with('/') {
        return !s.bytes().any(|b| b.is_ascii_control());
    }
    parse_absolute(s).is_some()
}

// ============================================================================
// IP / PORT
// ============================================================================

/// IPv4 or IPv6 address in textual form.
pub fn ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// IP address written in dotted form.
///
/// An IPv4-mapped IPv6 address such as `::ffff:1.2.3.4` counts as both
/// [`ipv4`] and [`ipv6`].
pub fn ipv4(s: &str) -> bool {
    ip(s) && s.contains('.')
}

/// IP address written with colons.
pub fn ipv6(s: &str) -> bool {
    ip(s) && s.contains(':')
}

/// Decimal port number in `1..=65535`.
pub fn port(s: &str) -> bool {
    s.parse::<i64>().is_ok_and(|p| (1..=65_535).contains(&p))
}

/// `host:port` suitable for dialling, where host is a DNS name or an IP
/// address. IPv6 hosts must be bracketed: `[::1]:80`.
pub fn dial_string(s: &str) -> bool {
    let Some((host, port_str)) = split_host_port(s) else {
        return false;
    };
    !host.is_empty() && !port_str.is_empty() && (dns_name(host) || ip(host)) && port(port_str)
}

fn split_host_port(s: &str) -> Option<(&str, &str)> {
    if let Some(rest) = s.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return Some((host, port));
    }
    let (host, port) = s.rsplit_once(':')?;
    if host.contains(':') || host.contains(['[', ']']) {
        return None;
    }
    Some((host, port))
}

// ============================================================================
// MAC
// ============================================================================

/// IEEE 802 MAC-48, EUI-64 or 20-octet IP-over-InfiniBand address.
///
/// Accepted layouts:
///
/// - `01:23:45:67:89:ab`, `01:23:45:67:89:ab:cd:ef` (and the 20-octet form)
/// - the same with `-` separators
/// - `0123.4567.89ab`, `0123.4567.89ab.cdef` (and the 20-octet form)
///
/// Separators must not be mixed.
pub fn mac(s: &str) -> bool {
    let (sep, group_len, allowed_groups): (char, usize, [usize; 3]) = match s.as_bytes().get(2) {
        Some(b':') => (':', 2, [6, 8, 20]),
        Some(b'-') => ('-', 2, [6, 8, 20]),
        _ if s.as_bytes().get(4) == Some(&b'.') => ('.', 4, [3, 4, 10]),
        _ => return false,
    };
    let groups: Vec<&str> = s.split(sep).collect();
    allowed_groups.contains(&groups.len())
        && groups
            .iter()
            .all(|g| g.len() == group_len && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

// ============================================================================
// DNS
// ============================================================================

/// Maximum host-name length, not counting dots.
const DNS_MAX_LEN: usize = 255;

/// DNS host name: dot-separated labels of 1 to 63 ASCII letters, digits and
/// hyphens, none starting with a hyphen. A trailing dot is allowed.
///
/// Internationalised names must already be in punycode.
pub fn dns_name(s: &str) -> bool {
    if s.is_empty() || s.bytes().filter(|&b| b != b'.').count() > DNS_MAX_LEN {
        return false;
    }
    patterns::DNS_NAME.is_match(s)
}
