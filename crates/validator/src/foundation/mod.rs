//! Core validation types and traits.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorSeverity`]
//!
//! Validators are generic over their input type and compose with `and`,
//! `or` and `not`:
//!
//! ```
//! use verity_validator::prelude::*;
//!
//! let card = credit_card().and(FormatCheck::new(Format::Numeric));
//! assert!(card.validate("4716461583322103").is_ok());
//! assert!(card.validate("4716-2210-5188-5662").is_err()); // separators
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorSeverity, ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every validator and collects all failures.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}

/// Succeeds on the first validator that passes; otherwise returns every
/// failure in order.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
