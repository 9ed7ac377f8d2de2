//! Semantic Versioning 2.0.0.

use crate::patterns;

/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` with an optional leading `v`.
///
/// Numeric identifiers (core numbers and numeric pre-release parts) must not
/// have leading zeros. Build metadata identifiers may.
///
/// ```
/// use verity_validator::is;
///
/// assert!(is::semver("v1.0.0"));
/// assert!(is::semver("1.0.0-beta+exp.sha.05114f85"));
/// assert!(!is::semver("1.1.01"));
/// ```
pub fn semver(s: &str) -> bool {
    patterns::SEMVER.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v1.0.0", true)]
    #[case("1.0.0", true)]
    #[case("1.1.1", true)]
    #[case("1.0.0-alpha", true)]
    #[case("1.0.0-alpha.1", true)]
    #[case("1.0.0-0.3.7", true)]
    #[case("1.0.0-x.7.z.92", true)]
    #[case("1.0.0-alpha+001", true)]
    #[case("1.0.0+20130313144700", true)]
    #[case("1.0.0-beta+exp.sha.5114f85", true)]
    #[case("1.0.0-beta+exp.sha.05114f85", true)]
    #[case("1.0.0-beta.11", true)]
    #[case("1.0.0-rc.1", true)]
    #[case("", false)]
    #[case("1.0", false)]
    #[case("1.1.01", false)]
    #[case("1.01.0", false)]
    #[case("01.1.0", false)]
    #[case("v1.1.01", false)]
    #[case("v1.01.0", false)]
    #[case("v01.1.0", false)]
    #[case("1.0.0-0.03.7", false)]
    #[case("1.0.0-00.3.7", false)]
    #[case("1.0.0-+beta", false)]
    #[case("1.0.0-b+-9+eta", false)]
    #[case("v+1.8.0-b+-9+eta", false)]
    fn test_semver(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(semver(input), expected);
    }
}
