//! # verity-validator
//!
//! String format predicates with a typed validation layer on top.
//!
//! ## Predicates
//!
//! [`is`] holds pure `&str -> bool` checks: character classes, Luhn and ISBN
//! check digits, UUIDs, colours, URLs, IP and MAC addresses, DNS names,
//! base64, JSON, numeric ranges, file paths and ISO 3166 codes. They are
//! also re-exported at the crate root.
//!
//! ```
//! assert!(verity_validator::credit_card("4716-2210-5188-5662"));
//! assert!(verity_validator::is::dns_name("example.com."));
//! ```
//!
//! ## Typed validators
//!
//! [`validators`] wraps the predicates in the [`Validate`](foundation::Validate)
//! trait so failures carry a [`ValidationError`](foundation::ValidationError)
//! and compose with `.and()`, `.or()` and `.not()`:
//!
//! ```
//! use verity_validator::prelude::*;
//!
//! let color = hex_color().or(rgb_color());
//! assert!(color.validate("#c0ffee").is_ok());
//! assert!(color.validate("rgb(0,31,255)").is_ok());
//!
//! let err = color.validate("red").unwrap_err();
//! assert_eq!(err.code, "or_failed");
//! assert_eq!(err.nested.len(), 2);
//! ```
//!
//! Use the [`validator!`] macro to declare new validators, or implement
//! [`Validate`](foundation::Validate) by hand.
//!
//! ## Named formats
//!
//! [`format::Format`] names every single-string predicate, for callers that
//! get the format as data.

// ValidationError is the error type of every validator; boxing it would add
// an allocation to each failure for no practical benefit.
#![allow(clippy::result_large_err)]
// Nested combinators (And<Or<Not<...>, ...>, ...>) produce long types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod format;
pub mod foundation;
pub mod is;
mod macros;
mod patterns;
pub mod prelude;
pub mod validators;

#[allow(clippy::wildcard_imports)]
pub use is::*;
