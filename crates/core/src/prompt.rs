//! Prompt field rules.
//!
//! The store accepts whatever it is given, so every write path runs the
//! presence checks here first. Only presence is enforced: there are no
//! length or format limits on titles or bodies.

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log fields.
pub const PROMPT_ENTITY: &str = "Prompt";

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace from a submitted field value.
///
/// Returns the input unchanged (no allocation) when there is nothing to trim.
pub fn normalize_field(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject text containing `\0`. `field` names the value in the message.
pub fn validate_no_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Validate a prompt title: must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    validate_no_nul("Title", title)
}

/// Validate a prompt body: must be non-empty after trimming.
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Prompt text must not be empty".to_string(),
        ));
    }
    validate_no_nul("Prompt text", body)
}

/// Validate both required fields of a create or update.
pub fn validate_fields(title: &str, body: &str) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_body(body)
}
