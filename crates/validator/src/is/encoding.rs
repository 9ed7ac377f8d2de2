//! Encoded payloads: Base64, `data:` URIs and JSON documents.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};

use crate::patterns;

/// Standard alphabet with canonical padding. Non-zero trailing bits in the
/// final quantum are tolerated.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Non-empty standard Base64 with `=` padding.
pub fn base64(s: &str) -> bool {
    !s.is_empty() && STANDARD_LENIENT.decode(s).is_ok()
}

/// `data:<type>/<subtype>;base64,<payload>` with a valid Base64 payload.
pub fn data_uri(s: &str) -> bool {
    let Some((head, payload)) = s.split_once(',') else {
        return false;
    };
    patterns::DATA_URI.is_match(head) && base64(payload)
}

/// Well-formed JSON text of any type, including bare scalars like `145`
/// or `null`.
pub fn json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RSA_KEY: &str = concat!(
        "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAuMPNS1Ufof9EW/M98FNw",
        "UAKrwflsqVxaxQjBQnHQmiI7Vac40t8x7pIb8gLGV6wL7sBTJiPovJ0V7y7oc0Ye",
        "rhKh0Rm4skP2z/jHwwZICgGzBvA0rH8xlhUiTvcwDCJ0kc+fh35hNt8srZQM4619",
        "FTgB66Xmp4EtVyhpQV+t02g6NzK72oZI0vnAvqhpkxLeLiMCyrI416wHm5Tkukhx",
        "QmcL2a6hNOyu0ixX/x2kSFXApEnVrJ+/IxGyfyw8kf4N2IZpW5nEP847lpfj0SZZ",
        "Fwrd1mnfnDbYohX2zRptLy2ZUn06Qo9pkG5ntvFEPo9bfZeULtjYzIl6K8gJ2uGZ",
        "HQIDAQAB",
    );

    #[rstest]
    #[case("TG9yZW0gaXBzdW0gZG9sb3Igc2l0IGFtZXQsIGNvbnNlY3RldHVyIGFkaXBpc2NpbmcgZWxpdC4=", true)]
    #[case("Vml2YW11cyBmZXJtZW50dW0gc2VtcGVyIHBvcnRhLg==", true)]
    #[case("U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw==", true)]
    #[case(RSA_KEY, true)]
    #[case("12345", false)]
    #[case("", false)]
    #[case("Vml2YW11cyBmZXJtZtesting123", false)]
    #[case("U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw", false)]
    fn test_base64(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(base64(input), expected);
    }

    #[test]
    fn base64_tolerates_trailing_bits() {
        // "QQ==" is canonical for "A"; "QR==" carries a stray low bit.
        assert!(base64("QQ=="));
        assert!(base64("QR=="));
    }

    #[rstest]
    #[case(
        "data:image/png;base64,TG9yZW0gaXBzdW0gZG9sb3Igc2l0IGFtZXQsIGNvbnNlY3RldHVyIGFkaXBpc2NpbmcgZWxpdC4=",
        true
    )]
    #[case("data:text/plain;base64,Vml2YW11cyBmZXJtZW50dW0gc2VtcGVyIHBvcnRhLg==", true)]
    #[case("image/gif;base64,U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw==", false)]
    #[case("data:image/png;base64,12345", false)]
    #[case("data:text,:;base85,U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw==", false)]
    #[case("data:image/png;base64", false)]
    #[case("", false)]
    fn test_data_uri(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(data_uri(input), expected);
    }

    #[test]
    fn data_uri_with_long_payload() {
        assert!(data_uri(&format!("data:image/gif;base64,{RSA_KEY}")));
    }

    #[rstest]
    #[case("", false)]
    #[case("145", true)]
    #[case("asdf", false)]
    #[case("123:f00", false)]
    #[case(r#"{"Name":"Alice","Body":"Hello","Time":1294706395881547000}"#, true)]
    #[case("{}", true)]
    #[case(r#"{"Key":{"Key":{"Key":123}}}"#, true)]
    #[case("[]", true)]
    #[case("null", true)]
    #[case("[1, 2", false)]
    fn test_json(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(json(input), expected);
    }
}
