//! Typed validators.
//!
//! Each validator wraps one or more predicates from [`crate::is`] and
//! reports failures as a [`ValidationError`](crate::foundation::ValidationError)
//! with a stable code:
//!
//! | Code             | Raised by                                   |
//! |------------------|---------------------------------------------|
//! | `invalid_format` | every string validator; `expected` names it |
//! | `out_of_range`   | [`InRange`]                                 |
//! | `not_whole`      | [`Whole`]                                   |
//! | `not_natural`    | [`Natural`]                                 |
//!
//! ```
//! use verity_validator::prelude::*;
//!
//! let id = uuid_v4().and(FormatCheck::new(Format::LowerCase));
//! assert!(id.validate("57b73598-8764-4ad0-a76a-679bb6640eb1").is_ok());
//!
//! let err = in_range(10.0, 5.0).validate(&0.0).unwrap_err();
//! assert_eq!(err.code, "out_of_range");
//! assert_eq!(err.param("min"), Some("5"));
//! ```

pub mod checksum;
pub mod format_check;
pub mod network;
pub mod numeric;
pub mod structural;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use checksum::{CreditCard, Isbn, credit_card, isbn, isbn10, isbn13};
pub use format_check::{FormatCheck, format_check};
pub use network::{DnsName, Email, MacAddress, Url, dns_name, email, mac_address, url};
pub use numeric::{InRange, Natural, Whole, in_range, natural, whole};
pub use structural::{
    HexColor, RgbColor, Semver, Uuid, hex_color, rgb_color, semver, uuid, uuid_v3, uuid_v4,
    uuid_v5,
};
