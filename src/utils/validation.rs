use crate::utils::error::{Result, ScrubError};

/// Unwraps an optional value or fails with a `MissingValue` error naming the
/// field, instead of silently producing a default.
pub fn require_value<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScrubError::MissingValue {
        field: field_name.to_string(),
    })
}

/// Coalesces an optional text value down to a fallback.
pub fn value_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}
