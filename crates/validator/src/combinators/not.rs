//! Logical negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Passes exactly when the inner validator fails.
///
/// ```
/// use verity_validator::prelude::*;
///
/// let not_an_ip = FormatCheck::new(Format::Ip).not();
/// assert!(not_an_ip.validate("localhost").is_ok());
/// assert!(not_an_ip.validate("127.0.0.1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Function form of [`Not::new`].
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
