//! Equipment registration validation.

use crate::error::CoreError;

/// Maximum length of an equipment name.
pub const MAX_NAME_LEN: usize = 128;

/// Maximum length of the free-text `tool_type` and `location` fields.
pub const MAX_TEXT_LEN: usize = 256;

/// Validate an equipment name.
///
/// Rules:
/// - Must not be empty or whitespace only.
/// - Must not exceed `MAX_NAME_LEN` characters.
pub fn validate_equipment_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Equipment name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Equipment name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a free-text descriptive field (`tool_type`, `location`).
pub fn validate_text_field(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate all registration fields, reporting the first problem found.
pub fn validate_registration(name: &str, tool_type: &str, location: &str) -> Result<(), CoreError> {
    validate_equipment_name(name)?;
    validate_text_field(tool_type, "tool_type")?;
    validate_text_field(location, "location")?;
    Ok(())
}
