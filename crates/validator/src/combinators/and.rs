//! Logical conjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Both validators must pass. The first failure is returned unchanged.
///
/// ```
/// use verity_validator::combinators::And;
/// use verity_validator::prelude::*;
///
/// let hostname_port = And::new(
///     FormatCheck::new(Format::DialString),
///     FormatCheck::new(Format::Ascii),
/// );
/// assert!(hostname_port.validate("localhost.local:1").is_ok());
/// assert!(hostname_port.validate("localhost.loc:100000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Function form of [`And::new`].
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Every validator in a runtime-sized list must pass.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

/// Builds an [`AndAll`]. An empty list always passes.
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|v| v.validate(input))
    }
}
