//! Generic field guards

use super::result::ValidationError;

/// Return the value, or fail with `message` when it is absent
pub fn require_non_null<T>(value: Option<T>, message: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(message))
}

/// Return the text unchanged, or fail with `message` when it is absent or
/// contains only whitespace
pub fn require_non_blank<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::new(message)),
    }
}
