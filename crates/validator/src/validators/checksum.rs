//! Check-digit validators.

use crate::foundation::ValidationError;
use crate::is::{self, IsbnVersion};

crate::validator! {
    /// A Luhn-valid card number of 12 to 19 digits; `-` and spaces are
    /// ignored.
    pub CreditCard for str;
    rule(input) { is::credit_card(input) }
    error(input) {
        ValidationError::invalid_format("credit card number")
            .with_help("check for a mistyped digit")
    }
    fn credit_card();
}

const fn isbn_label(version: IsbnVersion) -> &'static str {
    match version {
        IsbnVersion::V10 => "ISBN-10",
        IsbnVersion::V13 => "ISBN-13",
        IsbnVersion::Either => "ISBN",
    }
}

crate::validator! {
    /// An ISBN of the configured version.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Isbn { version: IsbnVersion } for str;
    rule(self, input) { is::isbn(input, self.version) }
    error(self, input) { ValidationError::invalid_format(isbn_label(self.version)) }
    fn isbn(version: IsbnVersion);
}

impl Default for Isbn {
    fn default() -> Self {
        Self::new(IsbnVersion::default())
    }
}

/// Shorthand for `isbn(IsbnVersion::V10)`.
#[must_use]
pub const fn isbn10() -> Isbn {
    Isbn {
        version: IsbnVersion::V10,
    }
}

/// Shorthand for `isbn(IsbnVersion::V13)`.
#[must_use]
pub const fn isbn13() -> Isbn {
    Isbn {
        version: IsbnVersion::V13,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[test]
    fn credit_card_error_has_help() {
        let err = credit_card().validate("4716-2210-5188-5663").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("credit card number"));
        assert!(err.help.is_some());
        assert!(credit_card().validate("4716-2210-5188-5662").is_ok());
    }

    #[rstest]
    #[case(IsbnVersion::V10, "3836221195", true, "ISBN-10")]
    #[case(IsbnVersion::V10, "9784873113685", false, "ISBN-10")]
    #[case(IsbnVersion::V13, "978-4-87311-368-5", true, "ISBN-13")]
    #[case(IsbnVersion::V13, "9784873113684", false, "ISBN-13")]
    #[case(IsbnVersion::Either, "3-8362-2119-5", true, "ISBN")]
    #[case(IsbnVersion::Either, "foo", false, "ISBN")]
    fn isbn_versions(
        #[case] version: IsbnVersion,
        #[case] input: &str,
        #[case] valid: bool,
        #[case] label: &str,
    ) {
        match isbn(version).validate(input) {
            Ok(()) => assert!(valid),
            Err(err) => {
                assert!(!valid);
                assert_eq!(err.param("expected"), Some(label));
            }
        }
    }

    #[test]
    fn shorthands_and_default() {
        assert_eq!(isbn10(), Isbn::new(IsbnVersion::V10));
        assert_eq!(isbn13(), Isbn::new(IsbnVersion::V13));
        assert_eq!(Isbn::default().version, IsbnVersion::Either);
    }
}
