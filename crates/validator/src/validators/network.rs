//! Validators for addresses and names used on the network.

use crate::foundation::ValidationError;
use crate::is;

crate::validator! {
    /// Weak e-mail check: an `@` with something on both sides.
    pub Email for str;
    rule(input) { is::email(input) }
    error(input) { ValidationError::invalid_format("e-mail address") }
    fn email();
}

crate::validator! {
    /// Absolute URL, or a scheme-less one such as `example.com/path`.
    pub Url for str;
    rule(input) { is::url(input) }
    error(input) { ValidationError::invalid_format("URL") }
    fn url();
}

crate::validator! {
    /// IEEE 802 MAC-48, EUI-48, EUI-64 or 20-octet InfiniBand address.
    pub MacAddress for str;
    rule(input) { is::mac(input) }
    error(input) { ValidationError::invalid_format("MAC address") }
    fn mac_address();
}

crate::validator! {
    pub DnsName for str;
    rule(input) { is::dns_name(input) }
    error(input) {
        ValidationError::invalid_format("DNS name")
            .with_help("labels are at most 63 characters and the name at most 255")
    }
    fn dns_name();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("foo@bar.com", true)]
    #[case("x@x.x", true)]
    #[case("invalidemail@", false)]
    #[case("", false)]
    fn email_validator(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(email().is_valid(input), valid);
    }

    #[rstest]
    #[case("http://foobar.com", true)]
    #[case("foobar.com", true)]
    #[case("http://www.foo_bar.com/", false)]
    #[case(".com", false)]
    fn url_validator(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(url().is_valid(input), valid);
    }

    #[rstest]
    #[case("01:23:45:67:89:ab", true)]
    #[case("0123.4567.89ab", true)]
    #[case("01:23:45:67:89", false)]
    fn mac_validator(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(mac_address().is_valid(input), valid);
    }

    #[test]
    fn dns_name_error() {
        assert!(dns_name().validate("localhost").is_ok());
        let err = dns_name().validate("-a.com").unwrap_err();
        assert_eq!(err.param("expected"), Some("DNS name"));
        assert!(err.help.is_some());
    }

    #[test]
    fn labels() {
        let expected = |v: &dyn Validate<Input = str>| {
            v.validate("").unwrap_err().param("expected").map(str::to_owned)
        };
        assert_eq!(expected(&email()).as_deref(), Some("e-mail address"));
        assert_eq!(expected(&url()).as_deref(), Some("URL"));
        assert_eq!(expected(&mac_address()).as_deref(), Some("MAC address"));
        assert_eq!(expected(&dns_name()).as_deref(), Some("DNS name"));
    }
}
