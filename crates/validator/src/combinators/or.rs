//! Logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// At least one validator must pass.
///
/// The right side is only tried when the left fails. If both fail, the
/// error has code `or_failed` and nests both inner errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(right_error) = self.right.validate(input) else {
            return Ok(());
        };
        Err(ValidationError::new("or_failed", "All alternatives failed")
            .with_nested(vec![left_error, right_error]))
    }
}

/// Function form of [`Or::new`].
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Passes when any validator in a runtime-sized list passes.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

/// Builds an [`OrAny`].
///
/// ```
/// use verity_validator::combinators::or_any;
/// use verity_validator::prelude::*;
///
/// let host = or_any(vec![
///     FormatCheck::new(Format::Ip),
///     FormatCheck::new(Format::DnsName),
/// ]);
/// assert!(host.validate("::1").is_ok());
/// assert!(host.validate("localhost").is_ok());
/// assert!(host.validate("-localhost").is_err());
/// ```
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::with_capacity(self.validators.len());

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        let count = errors.len();
        Err(
            ValidationError::new("or_any_failed", format!("All {count} alternatives failed"))
                .with_nested(errors),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::is::IsbnVersion;
    use crate::validators::{Isbn, isbn10, isbn13};

    #[test]
    fn either_side_may_pass() {
        let v = Or::new(isbn10(), isbn13());
        assert!(v.validate("3-423-21412-0").is_ok());
        assert!(v.validate("978-3-8362-2119-1").is_ok());
    }

    #[test]
    fn both_errors_are_nested() {
        let err = isbn10().or(isbn13()).validate("3836221190").unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.nested.len(), 2);
        assert_eq!(err.nested[0].param("expected"), Some("ISBN-10"));
        assert_eq!(err.nested[1].param("expected"), Some("ISBN-13"));
    }

    #[test]
    fn or_any_reports_every_alternative() {
        let v = or_any(vec![
            Isbn::new(IsbnVersion::V10),
            Isbn::new(IsbnVersion::V13),
        ]);
        assert!(v.validate("9784873113685").is_ok());

        let err = v.validate("").unwrap_err();
        assert_eq!(err.code, "or_any_failed");
        assert_eq!(err.nested.len(), 2);
    }
}
