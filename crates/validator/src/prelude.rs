//! Prelude module for convenient imports.
//!
//! `use verity_validator::prelude::*;` brings in the traits, error types,
//! combinators, typed validators and [`Format`]. The raw predicates stay
//! behind the [`is`] path because several share a name with their typed
//! validator (`is::email` vs [`email()`]).
//!
//! ```
//! use verity_validator::prelude::*;
//!
//! let reference = any_of![isbn13(), FormatCheck::new(Format::MongoId)];
//! assert!(reference.validate("978-4-87311-368-5").is_ok());
//! assert!(is::mongo_id("507f1f77bcf86cd799439011"));
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    ErrorSeverity, Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, AndAll, Not, Or, OrAny, and, and_all, not, or, or_any};

// ============================================================================
// FORMATS AND PREDICATES
// ============================================================================

pub use crate::format::{Format, UnknownFormat};
pub use crate::is::{self, IsbnVersion, PathKind, UuidVersion};
pub use crate::{any_of, compose};
