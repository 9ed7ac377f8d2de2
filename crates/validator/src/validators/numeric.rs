//! Validators over `f64` values.

use crate::foundation::ValidationError;
use crate::is;

crate::validator! {
    /// Inclusive range check. Bounds given in either order are normalised
    /// so that `min <= max`.
    ///
    /// ```
    /// use verity_validator::prelude::*;
    ///
    /// let v = InRange::new(10.0, 5.0);
    /// assert_eq!((v.min, v.max), (5.0, 10.0));
    /// assert!(v.validate(&7.5).is_ok());
    /// ```
    #[derive(Copy, PartialEq)]
    pub InRange { min: f64, max: f64 } for f64;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    new(left: f64, right: f64) {
        if left > right {
            Self { min: right, max: left }
        } else {
            Self { min: left, max: right }
        }
    }
    fn in_range(left: f64, right: f64);
}

crate::validator! {
    /// Finite with no fractional part.
    pub Whole for f64;
    rule(input) { is::whole(*input) }
    error(input) { ValidationError::not_whole(*input) }
    fn whole();
}

crate::validator! {
    /// Whole and strictly positive.
    pub Natural for f64;
    rule(input) { is::natural(*input) }
    error(input) { ValidationError::not_natural(*input) }
    fn natural();
}
