//! Validation against any named [`Format`].

use crate::foundation::ValidationError;
use crate::format::Format;

crate::validator! {
    /// Passes when [`Format::check`] does. The error's `expected` param is
    /// the format name.
    ///
    /// ```
    /// use verity_validator::prelude::*;
    ///
    /// let check = FormatCheck::new(Format::Semver);
    /// assert!(check.validate("v1.2.3-beta.1+build.5").is_ok());
    /// assert_eq!(
    ///     check.validate("1.2").unwrap_err().param("expected"),
    ///     Some("semver"),
    /// );
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub FormatCheck { format: Format } for str;
    rule(self, input) { self.format.check(input) }
    error(self, input) { ValidationError::invalid_format(self.format.name()) }
    fn format_check(format: Format);
}

impl From<Format> for FormatCheck {
    fn from(format: Format) -> Self {
        Self::new(format)
    }
}
