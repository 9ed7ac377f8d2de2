//! Named formats.
//!
//! [`Format`] names every single-string predicate in [`crate::is`] so
//! callers that receive a format as data (a CLI argument, a config value, a
//! schema) can dispatch without a lookup table of function pointers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::is;

/// A predicate from [`crate::is`] that takes exactly one string.
///
/// Names are kebab-case and are the same for [`Format::name`], `Display`,
/// `FromStr` and serde.
///
/// ```
/// use verity_validator::format::Format;
///
/// let format: Format = "uuid-v4".parse().unwrap();
/// assert_eq!(format, Format::UuidV4);
/// assert!(format.check("57b73598-8764-4ad0-a76a-679bb6640eb1"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    // character classes
    Alpha,
    UtfLetter,
    Alphanumeric,
    UtfLetterNumeric,
    Numeric,
    UtfNumeric,
    UtfDigit,
    Ascii,
    PrintableAscii,
    Multibyte,
    FullWidth,
    HalfWidth,
    VariableWidth,
    LowerCase,
    UpperCase,
    // checksums
    CreditCard,
    Isbn,
    Isbn10,
    Isbn13,
    // structural
    Uuid,
    UuidV3,
    UuidV4,
    UuidV5,
    HexColor,
    RgbColor,
    MongoId,
    Ssn,
    Hexadecimal,
    Semver,
    // network
    Email,
    Url,
    RequestUrl,
    RequestUri,
    Ip,
    Ipv4,
    Ipv6,
    Port,
    DialString,
    Mac,
    DnsName,
    // numbers in text
    Int,
    Float,
    Latitude,
    Longitude,
    // encodings
    Base64,
    DataUri,
    Json,
    // misc
    Null,
    FilePath,
    Iso3166Alpha2,
    Iso3166Alpha3,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Format; 51] = [
        Self::Alpha,
        Self::UtfLetter,
        Self::Alphanumeric,
        Self::UtfLetterNumeric,
        Self::Numeric,
        Self::UtfNumeric,
        Self::UtfDigit,
        Self::Ascii,
        Self::PrintableAscii,
        Self::Multibyte,
        Self::FullWidth,
        Self::HalfWidth,
        Self::VariableWidth,
        Self::LowerCase,
        Self::UpperCase,
        Self::CreditCard,
        Self::Isbn,
        Self::Isbn10,
        Self::Isbn13,
        Self::Uuid,
        Self::UuidV3,
        Self::UuidV4,
        Self::UuidV5,
        Self::HexColor,
        Self::RgbColor,
        Self::MongoId,
        Self::Ssn,
        Self::Hexadecimal,
        Self::Semver,
        Self::Email,
        Self::Url,
        Self::RequestUrl,
        Self::RequestUri,
        Self::Ip,
        Self::Ipv4,
        Self::Ipv6,
        Self::Port,
        Self::DialString,
        Self::Mac,
        Self::DnsName,
        Self::Int,
        Self::Float,
        Self::Latitude,
        Self::Longitude,
        Self::Base64,
        Self::DataUri,
        Self::Json,
        Self::Null,
        Self::FilePath,
        Self::Iso3166Alpha2,
        Self::Iso3166Alpha3,
    ];

    /// Kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::UtfLetter => "utf-letter",
            Self::Alphanumeric => "alphanumeric",
            Self::UtfLetterNumeric => "utf-letter-numeric",
            Self::Numeric => "numeric",
            Self::UtfNumeric => "utf-numeric",
            Self::UtfDigit => "utf-digit",
            Self::Ascii => "ascii",
            Self::PrintableAscii => "printable-ascii",
            Self::Multibyte => "multibyte",
            Self::FullWidth => "full-width",
            Self::HalfWidth => "half-width",
            Self::VariableWidth => "variable-width",
            Self::LowerCase => "lower-case",
            Self::UpperCase => "upper-case",
            Self::CreditCard => "credit-card",
            Self::Isbn => "isbn",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::Uuid => "uuid",
            Self::UuidV3 => "uuid-v3",
            Self::UuidV4 => "uuid-v4",
            Self::UuidV5 => "uuid-v5",
            Self::HexColor => "hex-color",
            Self::RgbColor => "rgb-color",
            Self::MongoId => "mongo-id",
            Self::Ssn => "ssn",
            Self::Hexadecimal => "hexadecimal",
            Self::Semver => "semver",
            Self::Email => "email",
            Self::Url => "url",
            Self::RequestUrl => "request-url",
            Self::RequestUri => "request-uri",
            Self::Ip => "ip",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Port => "port",
            Self::DialString => "dial-string",
            Self::Mac => "mac",
            Self::DnsName => "dns-name",
            Self::Int => "int",
            Self::Float => "float",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Base64 => "base64",
            Self::DataUri => "data-uri",
            Self::Json => "json",
            Self::Null => "null",
            Self::FilePath => "file-path",
            Self::Iso3166Alpha2 => "iso3166-alpha2",
            Self::Iso3166Alpha3 => "iso3166-alpha3",
        }
    }

    /// Runs the predicate this format names.
    pub fn check(self, s: &str) -> bool {
        match self {
            Self::Alpha => is::alpha(s),
            Self::UtfLetter => is::utf_letter(s),
            Self::Alphanumeric => is::alphanumeric(s),
            Self::UtfLetterNumeric => is::utf_letter_numeric(s),
            Self::Numeric => is::numeric(s),
            Self::UtfNumeric => is::utf_numeric(s),
            Self::UtfDigit => is::utf_digit(s),
            Self::Ascii => is::ascii(s),
            Self::PrintableAscii => is::printable_ascii(s),
            Self::Multibyte => is::multibyte(s),
            Self::FullWidth => is::full_width(s),
            Self::HalfWidth => is::half_width(s),
            Self::VariableWidth => is::variable_width(s),
            Self::LowerCase => is::lower_case(s),
            Self::UpperCase => is::upper_case(s),
            Self::CreditCard => is::credit_card(s),
            Self::Isbn => is::isbn(s, is::IsbnVersion::Either),
            Self::Isbn10 => is::isbn10(s),
            Self::Isbn13 => is::isbn13(s),
            Self::Uuid => is::uuid(s),
            Self::UuidV3 => is::uuid_v3(s),
            Self::UuidV4 => is::uuid_v4(s),
            Self::UuidV5 => is::uuid_v5(s),
            Self::HexColor => is::hex_color(s),
            Self::RgbColor => is::rgb_color(s),
            Self::MongoId => is::mongo_id(s),
            Self::Ssn => is::ssn(s),
            Self::Hexadecimal => is::hexadecimal(s),
            Self::Semver => is::semver(s),
            Self::Email => is::email(s),
            Self::Url => is::url(s),
            Self::RequestUrl => is::request_url(s),
            Self::RequestUri => is::request_uri(s),
            Self::Ip => is::ip(s),
            Self::Ipv4 => is::ipv4(s),
            Self::Ipv6 => is::ipv6(s),
            Self::Port => is::port(s),
            Self::DialString => is::dial_string(s),
            Self::Mac => is::mac(s),
            Self::DnsName => is::dns_name(s),
            Self::Int => is::int(s),
            Self::Float => is::float(s),
            Self::Latitude => is::latitude(s),
            Self::Longitude => is::longitude(s),
            Self::Base64 => is::base64(s),
            Self::DataUri => is::data_uri(s),
            Self::Json => is::json(s),
            Self::Null => is::null(s),
            Self::FilePath => is::file_path(s).0,
            Self::Iso3166Alpha2 => is::iso3166_alpha2(s),
            Self::Iso3166Alpha3 => is::iso3166_alpha3(s),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to parse a [`Format`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownFormat {
    #[error("format name is empty")]
    Empty,

    #[error("unknown format `{0}` (run `verity list` for the known names)")]
    Name(String),
}

impl FromStr for Format {
    type Err = UnknownFormat;

    /// Exact, case-sensitive match on [`Format::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UnknownFormat::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat::Name(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Format::ALL.len());
    }

    #[test]
    fn name_parses_back() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
    }

    #[test]
    fn serde_uses_the_same_names() {
        for format in Format::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.name()));
            assert_eq!(serde_json::from_str::<Format>(&json).unwrap(), format);
        }
    }

    #[rstest]
    #[case("")]
    #[case("UUID")]
    #[case("uuid_v4")]
    #[case("colour")]
    fn unknown_names_are_rejected(#[case] name: &str) {
        assert!(name.parse::<Format>().is_err());
    }

    #[test]
    fn empty_name_has_its_own_error() {
        assert_eq!("".parse::<Format>(), Err(UnknownFormat::Empty));
        assert_eq!(
            "colour".parse::<Format>().unwrap_err().to_string(),
            "unknown format `colour` (run `verity list` for the known names)"
        );
    }

    #[rstest]
    #[case(Format::Alpha, "abc", true)]
    #[case(Format::Alpha, "abc1", false)]
    #[case(Format::Numeric, "", true)]
    #[case(Format::CreditCard, "4716-2210-5188-5662", true)]
    #[case(Format::Isbn, "3836221195", true)]
    #[case(Format::Isbn, "9784873113685", true)]
    #[case(Format::Isbn10, "9784873113685", false)]
    #[case(Format::UuidV4, "a987fbc9-4bed-3078-cf07-9141ba07c9f3", false)]
    #[case(Format::Uuid, "a987fbc9-4bed-3078-cf07-9141ba07c9f3", true)]
    #[case(Format::HexColor, "#f00", true)]
    #[case(Format::RgbColor, "rgba(0,31,255)", false)]
    #[case(Format::Ipv4, "127.0.0.1", true)]
    #[case(Format::Ipv6, "127.0.0.1", false)]
    #[case(Format::Port, "65536", false)]
    #[case(Format::FilePath, "/usr/bin", true)]
    #[case(Format::FilePath, "usr/bin", false)]
    #[case(Format::Iso3166Alpha2, "DE", true)]
    #[case(Format::Iso3166Alpha3, "DE", false)]
    #[case(Format::Json, "{\"a\": [1, 2]}", true)]
    #[case(Format::Null, "", true)]
    fn check_dispatches(#[case] format: Format, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(format.check(input), expected, "{format} on {input:?}");
    }
}
