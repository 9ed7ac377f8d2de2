//! The `Validate` trait and its combinator extension.

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A typed check over some input.
///
/// `Input` may be unsized so validators can take `str` directly.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{Validate, ValidationError};
/// use verity_validator::is;
///
/// struct MongoId;
///
/// impl Validate for MongoId {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if is::mongo_id(input) {
///             Ok(())
///         } else {
///             Err(ValidationError::invalid_format("MongoDB ObjectId"))
///         }
///     }
/// }
///
/// assert!(MongoId.validate("507f1f77bcf86cd799439011").is_ok());
/// ```
pub trait Validate {
    type Input: ?Sized;

    /// Returns `Ok(())` when `input` passes.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Convenience wrapper for callers that only need a yes/no answer.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Fluent composition for every [`Validate`] implementation.
///
/// ```
/// use verity_validator::prelude::*;
///
/// let any_isbn = isbn10().or(isbn13());
/// assert!(any_isbn.validate("3836221195").is_ok());
/// assert!(any_isbn.validate("9784873113685").is_ok());
/// assert!(any_isbn.validate("3836221190").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Passes exactly when `self` fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Validate for NonEmpty {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::custom("empty"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn is_valid_mirrors_validate() {
        assert!(NonEmpty.is_valid("x"));
        assert!(!NonEmpty.is_valid(""));
    }

    #[test]
    fn references_validate_like_their_target() {
        let v = NonEmpty;
        let by_ref = &v;
        assert!(by_ref.validate("x").is_ok());
        assert!(by_ref.and(&v).validate("").is_err());
    }
}
