//! Character-class scanners.
//!
//! Per-code-point predicates over a whole string. The empty string is
//! accepted by every scanner in this module.

use crate::patterns;

/// Returns true if every code point in `s` satisfies `predicate`.
///
/// Stops at the first violation. An empty `s` is accepted.
#[inline]
pub fn scan(s: &str, predicate: impl Fn(char) -> bool) -> bool {
    s.chars().all(predicate)
}

/// ASCII letters only (`a-z`, `A-Z`).
pub fn alpha(s: &str) -> bool {
    scan(s, |c| c.is_ascii_alphabetic())
}

/// Unicode letters only (general category L, any script).
pub fn utf_letter(s: &str) -> bool {
    patterns::UTF_LETTER.is_match(s)
}

/// ASCII letters and digits only.
pub fn alphanumeric(s: &str) -> bool {
    scan(s, |c| c.is_ascii_alphanumeric())
}

/// Unicode letters and numbers only (categories L and N).
pub fn utf_letter_numeric(s: &str) -> bool {
    patterns::UTF_LETTER_NUMERIC.is_match(s)
}

/// ASCII digits only. Signs and decimal points are rejected.
pub fn numeric(s: &str) -> bool {
    scan(s, |c| c.is_ascii_digit())
}

/// Unicode numbers of any kind: decimal digits, fractions like `¾`,
/// Roman numerals like `Ⅸ`, Hangzhou numerals like `〩`.
pub fn utf_numeric(s: &str) -> bool {
    patterns::UTF_NUMERIC.is_match(s)
}

/// Unicode radix-10 decimal digits only (category Nd).
pub fn utf_digit(s: &str) -> bool {
    patterns::UTF_DIGIT.is_match(s)
}

/// 7-bit ASCII only.
pub fn ascii(s: &str) -> bool {
    scan(s, |c| c.is_ascii())
}

/// Printable ASCII only: space through tilde.
pub fn printable_ascii(s: &str) -> bool {
    scan(s, |c| (' '..='~').contains(&c))
}

/// Contains at least one code point outside ASCII.
///
/// Unlike the scanners above this is a "contains any" test; the empty
/// string is still accepted.
pub fn multibyte(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| !c.is_ascii())
}

// ============================================================================
// WIDTH
// ============================================================================

/// Half-width forms: printable ASCII plus the half-width katakana, hangul
/// and symbol blocks of the Halfwidth and Fullwidth Forms range.
fn is_half_width(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'..='\u{007E}'
            | '\u{FF61}'..='\u{FF9F}'
            | '\u{FFA0}'..='\u{FFDC}'
            | '\u{FFE8}'..='\u{FFEE}'
    )
}

/// Contains at least one full-width code point. Empty is accepted.
pub fn full_width(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| !is_half_width(c))
}

/// Contains at least one half-width code point. Empty is accepted.
pub fn half_width(s: &str) -> bool {
    s.is_empty() || s.chars().any(is_half_width)
}

/// Contains both full-width and half-width code points. Empty is accepted.
pub fn variable_width(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let (mut half, mut full) = (false, false);
    for c in s.chars() {
        if is_half_width(c) {
            half = true;
        } else {
            full = true;
        }
        if half && full {
            return true;
        }
    }
    false
}

// ============================================================================
// CASE
// ============================================================================

/// The string equals its Unicode lowercase mapping. Empty is accepted.
pub fn lower_case(s: &str) -> bool {
    s.is_empty() || s.to_lowercase() == s
}

/// The string equals its Unicode uppercase mapping. Empty is accepted.
pub fn upper_case(s: &str) -> bool {
    s.is_empty() || s.to_uppercase() == s
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::alpha(alpha)]
    #[case::utf_letter(utf_letter)]
    #[case::alphanumeric(alphanumeric)]
    #[case::utf_letter_numeric(utf_letter_numeric)]
    #[case::numeric(numeric)]
    #[case::utf_numeric(utf_numeric)]
    #[case::utf_digit(utf_digit)]
    #[case::ascii(ascii)]
    #[case::printable_ascii(printable_ascii)]
    #[case::multibyte(multibyte)]
    #[case::full_width(full_width)]
    #[case::half_width(half_width)]
    #[case::variable_width(variable_width)]
    #[case::lower_case(lower_case)]
    #[case::upper_case(upper_case)]
    fn empty_string_is_accepted(#[case] predicate: fn(&str) -> bool) {
        assert!(predicate(""));
    }

    #[rstest]
    #[case("abc", true)]
    #[case("FoObAr", true)]
    #[case("ix", true)]
    #[case("abc1", false)]
    #[case("   fooo   ", false)]
    #[case("소주", false)]
    #[case("Ⅸ", false)]
    #[case("\n", false)]
    fn test_alpha(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(alpha(input), expected);
    }

    #[rstest]
    #[case("소주", true)]
    #[case("소aBC", true)]
    #[case("모자", true)]
    #[case("abc", true)]
    #[case("Ⅸ", false)]
    #[case("abc〩", false)]
    #[case("달기&Co.", false)]
    #[case("1¾", false)]
    #[case("۳۵۶۰", false)]
    fn test_utf_letter(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(utf_letter(input), expected);
    }

    #[rstest]
    #[case("abc123", true)]
    #[case("ABC111", true)]
    #[case("abc!!!", false)]
    #[case("abc〩", false)]
    #[case("-00123", false)]
    fn test_alphanumeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(alphanumeric(input), expected);
    }

    #[rstest]
    #[case("abc1", true)]
    #[case("abc〩", true)]
    #[case("Ⅸ", true)]
    #[case("1¾", true)]
    #[case("소aBC", true)]
    #[case("abc!!!", false)]
    #[case("-1¾", false)]
    #[case("달기&Co.", false)]
    fn test_utf_letter_numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(utf_letter_numeric(input), expected);
    }

    #[rstest]
    #[case("0123", true)]
    #[case("123", true)]
    #[case("-0", false)]
    #[case("123.123", false)]
    #[case("+1", false)]
    #[case("۳۵۶۰", false)]
    fn test_numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(numeric(input), expected);
    }

    #[rstest]
    #[case("Ⅸ", true)]
    #[case("1¾", true)]
    #[case("〥〩", true)]
    #[case("12𐅪3", true)]
    #[case("۳۵۶۰", true)]
    #[case("-1¾", false)]
    #[case("ix", false)]
    #[case("123.123", false)]
    fn test_utf_numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(utf_numeric(input), expected);
    }

    #[rstest]
    #[case("1483920", true)]
    #[case("۳۵۶۰", true)]
    #[case("Ⅸ", false)]
    #[case("1¾", false)]
    #[case("12𐅪3", false)]
    #[case("-29", false)]
    fn test_utf_digit(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(utf_digit(input), expected);
    }

    #[rstest]
    #[case("foobar", true)]
    #[case("test@example.com", true)]
    #[case("ｆｏｏbar", false)]
    #[case("ｶﾀｶﾅ", false)]
    fn test_ascii(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ascii(input), expected);
    }

    #[rstest]
    #[case("1234abcDEF", true)]
    #[case("~", true)]
    #[case("newline\n", false)]
    #[case("\x19test\x7F", false)]
    #[case("ｆｏｏbar", false)]
    fn test_printable_ascii(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(printable_ascii(input), expected);
    }

    #[rstest]
    #[case("abc", false)]
    #[case("<>@;.-=", false)]
    #[case("あいうえお foobar", true)]
    #[case("test＠example.com", true)]
    #[case("ｶﾀｶﾅ", true)]
    fn test_multibyte(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(multibyte(input), expected);
    }

    #[rstest]
    #[case("abc123", false)]
    #[case("!\"#$%&()<>/+=-_? ~^|.,@`{}[]", false)]
    #[case("ひらがな・カタカナ、．漢字", true)]
    #[case("３ー０　ａ＠ｃｏｍ", true)]
    #[case("Good＝Parts", true)]
    fn test_full_width(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(full_width(input), expected);
    }

    #[rstest]
    #[case("あいうえお", false)]
    #[case("００１１", false)]
    #[case("l-btn_02--active", true)]
    #[case("abc123い", true)]
    #[case("ｶﾀｶﾅﾞﾬ￩", true)]
    fn test_half_width(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(half_width(input), expected);
    }

    #[rstest]
    #[case("ひらがなカタカナ漢字ABCDE", true)]
    #[case("３ー０123", true)]
    #[case("Ｆｶﾀｶﾅﾞﾬ", true)]
    #[case("abc123", false)]
    #[case("１２３４５６", false)]
    #[case("ｶﾀｶﾅﾞﾬ", false)]
    fn test_variable_width(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(variable_width(input), expected);
    }

    #[rstest]
    #[case("abc123", true)]
    #[case("a b c", true)]
    #[case("abcß", true)]
    #[case("abcẞ", false)]
    #[case("fooBar", false)]
    fn test_lower_case(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(lower_case(input), expected);
    }

    #[rstest]
    #[case("ABC123", true)]
    #[case("S T R", true)]
    #[case("ABCẞ", true)]
    #[case("abcß", false)]
    #[case("fooBar", false)]
    fn test_upper_case(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(upper_case(input), expected);
    }

    #[test]
    fn scan_stops_at_first_violation() {
        let visited = Cell::new(0);
        let ok = scan("ab!cd", |c| {
            visited.set(visited.get() + 1);
            c.is_ascii_alphabetic()
        });
        assert!(!ok);
        assert_eq!(visited.get(), 3);
    }
}
