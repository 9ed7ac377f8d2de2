//! Structured errors for the typed validator layer.
//!
//! Predicates in [`crate::is`] only ever answer `true` or `false`. When a
//! caller needs to know *why* a value was rejected, the typed validators in
//! [`crate::validators`] wrap those answers in a [`ValidationError`] carrying
//! a stable code, a message and ordered parameters.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a value failed a typed validator.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::ValidationError;
///
/// let error = ValidationError::invalid_format("ISBN-13")
///     .with_field("isbn")
///     .with_help("strip the check digit and recompute it");
///
/// assert_eq!(error.code, "invalid_format");
/// assert_eq!(error.param("expected"), Some("ISBN-13"));
/// assert_eq!(error.field.as_deref(), Some("isbn"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable snake_case code, e.g. `invalid_format` or `out_of_range`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, e.g. `order.card_number`.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value parameters (usually `expected`, `min`, `max`,
    /// `actual`).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors from inner validators, e.g. both sides of a failed `or`.
    pub nested: Vec<ValidationError>,

    pub severity: ErrorSeverity,

    /// Optional hint for fixing the value.
    pub help: Option<Cow<'static, str>>,
}

/// Severity level of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    #[default]
    Error,
    Warning,
    Info,
}

impl ValidationError {
    /// Creates an error from a code and a message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
            severity: ErrorSeverity::Error,
            help: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a parameter. Order is preserved in `Display` output.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Counts this error and every nested one.
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// All errors depth-first, this one first.
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// JSON rendering used by machine-readable reports.
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "severity": self.severity,
            "help": self.help,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            f.write_str(" (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            f.write_str(")")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  help: {help}")?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// `invalid_format`: the value is not a well-formed `expected`.
    ///
    /// Carries no field; attach one with [`ValidationError::with_field`].
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Not a valid {expected}"))
            .with_param("expected", expected)
    }

    /// `out_of_range`: the value lies outside `[min, max]`.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// `not_whole`: the value has a fractional part (or is not finite).
    pub fn not_whole(actual: f64) -> Self {
        Self::new("not_whole", "Value must be a whole number")
            .with_param("actual", actual.to_string())
    }

    /// `not_natural`: the value is not a positive whole number.
    pub fn not_natural(actual: f64) -> Self {
        Self::new("not_natural", "Value must be a positive whole number")
            .with_param("actual", actual.to_string())
    }

    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Errors gathered from several validators run against the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Folds the collection into one error whose `nested` holds every entry.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("validation_errors", message).with_nested(self.errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_code_and_message_do_not_allocate() {
        let error = ValidationError::new("invalid_format", "Not a valid UUID");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn invalid_format_carries_expected() {
        let error = ValidationError::invalid_format("UUID v4").with_field("id");
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.field.as_deref(), Some("id"));
        assert_eq!(error.param("expected"), Some("UUID v4"));
        assert_eq!(error.to_string(), "[id] invalid_format: Not a valid UUID v4 (expected=UUID v4)");
    }

    #[test]
    fn out_of_range_params_are_ordered() {
        let error = ValidationError::out_of_range(0.0, 1.0, 1.5).with_field("ratio");
        let keys: Vec<&str> = error.params.iter().map(|(k, _)| k.as_ref()).collect();
        assert_eq!(keys, ["min", "max", "actual"]);
        assert_eq!(error.param("actual"), Some("1.5"));
    }

    #[test]
    fn nested_errors_are_counted_and_flattened() {
        let error = ValidationError::new("or_failed", "All alternatives failed").with_nested(vec![
            ValidationError::invalid_format("ISBN-10")
                .with_nested(vec![ValidationError::custom("bad check digit")]),
            ValidationError::invalid_format("ISBN-13"),
        ]);

        assert_eq!(error.total_error_count(), 4);
        let codes: Vec<&str> = error.flatten().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["or_failed", "invalid_format", "custom", "invalid_format"]);
    }

    #[test]
    fn json_rendering() {
        let error = ValidationError::not_whole(2.5)
            .with_field("qty")
            .with_severity(ErrorSeverity::Warning)
            .with_help("round the quantity");
        let json = error.to_json_value();

        assert_eq!(json["code"], "not_whole");
        assert_eq!(json["field"], "qty");
        assert_eq!(json["params"]["actual"], "2.5");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["help"], "round the quantity");
        assert_eq!(json["nested"], serde_json::json!([]));
    }

    #[test]
    fn collection_folds_into_single_error() {
        let errors: ValidationErrors = [
            ValidationError::invalid_format("e-mail address").with_field("a"),
            ValidationError::invalid_format("URL").with_field("b"),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 2);
        assert!(errors.to_string().starts_with("validation failed with 2 error(s):"));

        let single = errors.into_single_error("form rejected");
        assert_eq!(single.code, "validation_errors");
        assert_eq!(single.nested.len(), 2);
    }
}
