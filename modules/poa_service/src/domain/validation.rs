//! Input validation for POA requests
//!
//! Malformed input is rejected here, before any storage call.

use crate::contract::{NewPoaRequest, PoaError};

/// Validate a create/update input
pub fn validate_new_request(input: &NewPoaRequest) -> Result<(), PoaError> {
    require_non_blank("full_name", &input.full_name)?;
    require_non_blank("contact_info", &input.contact_info)?;
    require_non_blank("address", &input.address)?;
    require_non_blank("category", &input.category)?;
    require_non_blank("description_of_power", &input.description_of_power)?;
    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> Result<(), PoaError> {
    if value.trim().is_empty() {
        return Err(PoaError::Validation {
            message: format!("{} must not be blank", field),
        });
    }
    Ok(())
}
