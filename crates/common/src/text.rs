//! Text normalization helpers used by value object constructors.

use ddd_core::{DomainError, DomainResult};

/// Trimmed value of a required field; blank input is rejected.
pub fn required(field: &'static str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::debug!(field, "rejected blank required field");
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed value of an optional field; blank input becomes `None`.
pub fn optional(value: Option<impl Into<String>>) -> Option<String> {
    value
        .map(Into::into)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Optional field kept exactly as given; blank input becomes `None`.
pub fn non_blank(value: Option<impl Into<String>>) -> Option<String> {
    value
        .map(Into::into)
        .filter(|value| !value.trim().is_empty())
}
