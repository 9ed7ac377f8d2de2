//! Format predicates.
//!
//! Every function here is pure: it takes a value, inspects it and returns a
//! `bool` (or, for [`file_path`], a `bool` plus a [`PathKind`]). None of them
//! fail; errors from the parsers they delegate to are reported as `false`.
//! The single exception is [`exists`], which touches the file system.
//!
//! # Empty strings
//!
//! Per-character scanners ([`alpha`], [`numeric`], [`ascii`], …) and the
//! width/case checks accept `""`. Structural formats ([`uuid`],
//! [`credit_card`], [`url`], …) reject it. [`int`] and [`null`] accept it.
//!
//! # Examples
//!
//! ```
//! use verity_validator::is;
//!
//! assert!(is::credit_card("4716-2210-5188-5662"));
//! assert!(is::isbn13("978-4-87311-368-5"));
//! assert!(is::uuid_v4("57b73598-8764-4ad0-a76a-679bb6640eb1"));
//! assert!(is::rgb_color("rgb(0,31,255)"));
//! assert!(!is::hex_color("#ff12FG"));
//! ```

mod chars;
mod checksum;
mod color;
mod country;
mod encoding;
mod ident;
mod network;
mod numeric;
mod path;
mod semver;
mod text;
mod uuid;

pub use chars::{
    alpha, alphanumeric, ascii, full_width, half_width, lower_case, multibyte, numeric,
    printable_ascii, scan, upper_case, utf_digit, utf_letter, utf_letter_numeric, utf_numeric,
    variable_width,
};
pub use checksum::{IsbnVersion, UnknownIsbnVersion, credit_card, isbn, isbn10, isbn13};
pub use color::{hex_color, rgb_color};
pub use country::{iso3166_alpha2, iso3166_alpha3};
pub use encoding::{base64, data_uri, json};
pub use ident::{hexadecimal, mongo_id, ssn};
pub use network::{
    dial_string, dns_name, email, ip, ipv4, ipv6, mac, port, request_uri, request_url, url,
};
pub use numeric::{
    divisible_by, float, in_range, int, latitude, longitude, natural, negative, non_negative,
    non_positive, positive, whole,
};
pub use path::{PathKind, exists, file_path};
pub use semver::semver;
pub use text::{byte_length, matches, null, string_length};
pub use uuid::{UuidVersion, uuid, uuid_v3, uuid_v4, uuid_v5, uuid_version};
