//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The
//! document store does not enforce lengths, so every write path goes
//! through these.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names, assignee names
pub const MAX_NAME_LEN: usize = 200;

/// Room numbers ("204", "12B", "PH-1")
pub const MAX_ROOM_NUMBER_LEN: usize = 20;

/// Service names (catalog display names, stored as free text)
pub const MAX_SERVICE_LEN: usize = 100;

/// Request notes
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers, room type names, hotel ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Target URLs for QR generation
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_is_rejected() {
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn overlong_note_is_rejected() {
        let note = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&note, "notes", MAX_NOTE_LEN).is_err());
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn room_number_within_limit_passes() {
        assert!(validate_required_text("PH-1", "roomNumber", MAX_ROOM_NUMBER_LEN).is_ok());
    }
}
