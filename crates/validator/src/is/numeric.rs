//! Numeric predicates over `f64` values and over numeric strings.

// ============================================================================
// SIGN & INTEGRALITY
// ============================================================================

/// Strictly below zero. `-0.0` and NaN are not negative.
pub fn negative(value: f64) -> bool {
    value < 0.0
}

/// Strictly above zero.
pub fn positive(value: f64) -> bool {
    value > 0.0
}

/// Zero or above, `-0.0` included. NaN is neither sign.
pub fn non_negative(value: f64) -> bool {
    value >= 0.0
}

/// Zero or below.
pub fn non_positive(value: f64) -> bool {
    value <= 0.0
}

/// The IEEE 754 remainder of `value / 1` is zero.
///
/// Infinities and NaN are not whole.
pub fn whole(value: f64) -> bool {
    value.is_finite() && value - value.round_ties_even() == 0.0
}

/// Whole and strictly positive.
pub fn natural(value: f64) -> bool {
    whole(value) && positive(value)
}

/// `value` lies in the closed interval between `left` and `right`.
///
/// The bounds are swapped when `left > right`, so `in_range(0.0, 10.0, 5.0)`
/// checks against `[5, 10]`.
///
/// ```
/// use verity_validator::is;
///
/// assert!(is::in_range(0.0, 1.0, -1.0));
/// assert!(!is::in_range(0.0, 10.0, 5.0));
/// ```
pub fn in_range(value: f64, left: f64, right: f64) -> bool {
    let (lo, hi) = if left > right { (right, left) } else { (left, right) };
    value >= lo && value <= hi
}

// ============================================================================
// NUMERIC STRINGS
// ============================================================================

/// Signed 64-bit integer in decimal. Leading zeros and a sign are allowed.
/// The empty string is accepted.
pub fn int(s: &str) -> bool {
    s.is_empty() || s.parse::<i64>().is_ok()
}

/// Decimal floating-point literal, e.g. `-.123`, `123.`, `1e-3`.
pub fn float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// The number in `s`, truncated to an integer, is divisible by `n`.
///
/// An unparseable `s` counts as zero, which is divisible by anything. An
/// unparseable or zero `n` is never a valid divisor.
pub fn divisible_by(s: &str, n: &str) -> bool {
    let p = s.parse::<f64>().unwrap_or(0.0) as i64;
    let q = n.parse::<i64>().unwrap_or(0);
    if q == 0 {
        return false;
    }
    p == 0 || p.wrapping_rem(q) == 0
}

/// Decimal degrees in `-90..=90`.
pub fn latitude(s: &str) -> bool {
    parse_degrees(s).is_some_and(|deg| (-90.0..=90.0).contains(&deg))
}

/// Decimal degrees in `-180..=180`.
pub fn longitude(s: &str) -> bool {
    parse_degrees(s).is_some_and(|deg| (-180.0..=180.0).contains(&deg))
}

fn parse_degrees(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|deg| deg.is_finite())
}
