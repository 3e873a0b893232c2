//! Account number normalization and zero-padding

use super::result::ValidationError;

/// Width of a formatted account number
pub const ACCOUNT_NUMBER_LENGTH: usize = 8;

/// Trim the raw account number and check it only contains decimal digits
///
/// Any whitespace counts as blank, but only ASCII control characters and
/// spaces are trimmed from the ends; other padding fails the digit check.
pub fn normalize(raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::new("The account number is required.")),
    };

    let trimmed = raw.trim_matches(|c: char| c <= ' ');

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("The account number must be numeric."));
    }

    Ok(trimmed.to_string())
}

/// Normalize the raw account number and left-pad it with zeros to
/// [`ACCOUNT_NUMBER_LENGTH`] digits
pub fn format(raw: Option<&str>) -> Result<String, ValidationError> {
    let digits = normalize(raw)?;
    if digits.len() > ACCOUNT_NUMBER_LENGTH {
        return Err(ValidationError::new(
            "The account number must have at most 8 digits.",
        ));
    }

    Ok(format!("{:0>width$}", digits, width = ACCOUNT_NUMBER_LENGTH))
}
