use std::collections::HashMap;

use crate::error::ApiError;

/// Presence check for required request fields, keyed by wire name. Collects
/// every empty field so the client sees the full set in one response.
pub fn require_all(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: HashMap<String, String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| ((*name).to_string(), "this field is required".to_string()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "all fields are required",
            Some(missing),
        ))
    }
}
