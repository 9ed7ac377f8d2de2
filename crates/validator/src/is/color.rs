//! CSS-style colour literals.

use crate::patterns;

/// `#RGB` or `#RRGGBB`; the leading `#` is optional.
pub fn hex_color(s: &str) -> bool {
    let body = s.strip_prefix('#').unwrap_or(s);
    matches!(body.len(), 3 | 6) && body.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `rgb(R,G,B)` with each channel in `0..=255`.
///
/// Channels may be padded with whitespace but must not carry leading zeros,
/// so `rgb(01,31,255)` is rejected. `rgba(...)` is not accepted.
pub fn rgb_color(s: &str) -> bool {
    patterns::RGB_COLOR.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#ff0034", true)]
    #[case("#CCCCCC", true)]
    #[case("fff", true)]
    #[case("#f00", true)]
    #[case("", false)]
    #[case("#", false)]
    #[case("#ff", false)]
    #[case("fff0", false)]
    #[case("#ff12FG", false)]
    fn test_hex_color(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(hex_color(input), expected);
    }

    #[rstest]
    #[case("rgb(0,31,255)", true)]
    #[case("rgb(0,  31, 255)", true)]
    #[case("rgb( 255 , 0 , 9 )", true)]
    #[case("", false)]
    #[case("rgb(1,349,275)", false)]
    #[case("rgb(01,31,255)", false)]
    #[case("rgb(0,00,255)", false)]
    #[case("rgb(0.6,31,255)", false)]
    #[case("rgba(0,31,255)", false)]
    #[case("rgb(0,31)", false)]
    fn test_rgb_color(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(rgb_color(input), expected);
    }
}
