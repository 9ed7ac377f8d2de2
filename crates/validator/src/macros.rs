//! Macros for declaring typed validators with minimal boilerplate.
//!
//! - [`validator!`] declares the struct, its `Validate` impl and a factory fn
//! - [`compose!`] AND-chains validators
//! - [`any_of!`] OR-chains validators
//!
//! ```rust,ignore
//! use verity_validator::foundation::ValidationError;
//! use verity_validator::{is, validator};
//!
//! validator! {
//!     pub MongoId for str;
//!     rule(input) { is::mongo_id(input) }
//!     error(input) { ValidationError::invalid_format("MongoDB ObjectId") }
//!     fn mongo_id();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a validator: struct definition, `Validate` implementation,
/// constructor and factory function.
///
/// Unit validators always derive `Debug, Clone, Copy, PartialEq, Eq, Hash`.
/// Validators with fields derive `Debug, Clone`; add more via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator**:
/// ```rust,ignore
/// validator! {
///     pub HexColor for str;
///     rule(input) { is::hex_color(input) }
///     error(input) { ValidationError::invalid_format("hex colour") }
///     fn hex_color();
/// }
/// ```
///
/// **Fields with an automatic `new`** taking every field in order:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Isbn { version: IsbnVersion } for str;
///     rule(self, input) { is::isbn(input, self.version) }
///     error(self, input) { ValidationError::invalid_format("ISBN") }
///     fn isbn(version: IsbnVersion);
/// }
/// ```
///
/// **Fields with a custom `new`**:
/// ```rust,ignore
/// validator! {
///     pub InRange { min: f64, max: f64 } for f64;
///     rule(self, input) { *input >= self.min && *input <= self.max }
///     error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
///     new(left: f64, right: f64) { Self { min: left.min(right), max: left.max(right) } }
///     fn in_range(left: f64, right: f64);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Unit validator + factory fn
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // Unit validator, no factory
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // Fields + custom new + factory fn
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Fields + custom new, no factory
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // Fields + auto new + factory fn
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Fields + auto new, no factory
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// AND-chains validators. Needs `ValidateExt` in scope.
///
/// ```rust,ignore
/// let card = compose![credit_card(), FormatCheck::new(Format::Numeric)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// OR-chains validators. Needs `ValidateExt` in scope.
///
/// ```rust,ignore
/// let id = any_of![isbn10(), isbn13()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, ValidationError};
    use crate::is;

    validator! {
        /// ObjectId in its 24-digit hex form.
        TestMongoId for str;
        rule(input) { is::mongo_id(input) }
        error(input) { ValidationError::invalid_format("MongoDB ObjectId") }
        fn test_mongo_id();
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMaxBytes { max: usize } for str;
        rule(self, input) { is::byte_length(input, 0, self.max) }
        error(self, input) {
            ValidationError::new("too_long", format!("at most {} bytes", self.max))
        }
        fn test_max_bytes(max: usize);
    }

    validator! {
        #[derive(Copy, PartialEq)]
        TestBetween { lo: f64, hi: f64 } for f64;
        rule(self, input) { is::in_range(*input, self.lo, self.hi) }
        error(self, input) { ValidationError::out_of_range(self.lo, self.hi, *input) }
        new(a: f64, b: f64) { Self { lo: a.min(b), hi: a.max(b) } }
        fn test_between(a: f64, b: f64);
    }

    validator! {
        TestSsn for str;
        rule(input) { is::ssn(input) }
        error(input) { ValidationError::invalid_format("SSN") }
    }

    #[test]
    fn unit_validator_and_factory() {
        assert!(TestMongoId.validate("507f1f77bcf86cd799439011").is_ok());
        assert!(test_mongo_id().validate("507f1f77bcf86cd79943901").is_err());
    }

    #[test]
    fn unit_error_content() {
        let err = test_mongo_id().validate("").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("MongoDB ObjectId"));
    }

    #[test]
    fn unit_without_factory() {
        assert!(TestSsn.validate("191 60 2869").is_ok());
        assert!(TestSsn.validate("191 60 286").is_err());
    }

    #[test]
    fn struct_auto_new_and_factory() {
        let by_literal = TestMaxBytes { max: 3 };
        assert!(by_literal.validate("abc").is_ok());
        assert!(TestMaxBytes::new(3).validate("abcd").is_err());

        let err = test_max_bytes(2).validate("ééé").unwrap_err();
        assert_eq!(err.code, "too_long");
        assert_eq!(err.message, "at most 2 bytes");
    }

    #[test]
    fn custom_new_body_is_respected() {
        let v = TestBetween::new(10.0, 5.0);
        assert_eq!((v.lo, v.hi), (5.0, 10.0));
        assert!(test_between(10.0, 5.0).validate(&7.0).is_ok());
        assert!(v.validate(&4.0).is_err());
    }

    #[test]
    fn compose_and_any_of() {
        let strict = compose![test_max_bytes(24), TestMongoId];
        assert!(strict.validate("507f1f77bcf86cd799439011").is_ok());
        assert!(strict.validate("507f1f77bcf86cd79943901z").is_err());

        let either = any_of![TestMongoId, TestSsn];
        assert!(either.validate("191-60-2869").is_ok());
        assert!(either.validate("nope").is_err());
    }
}
