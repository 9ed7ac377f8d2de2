//! Validator combinators.
//!
//! Usually reached through [`ValidateExt`](crate::foundation::ValidateExt)
//! (`a.and(b)`, `a.or(b)`, `a.not()`); the function forms and the list
//! variants [`and_all`] / [`or_any`] live here.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use or::{Or, OrAny, or, or_any};
