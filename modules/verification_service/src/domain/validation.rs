//! Input validation for verification updates

use crate::contract::{VerificationError, VerificationUpdate};

/// Validate an update input
pub fn validate_update(update: &VerificationUpdate) -> Result<(), VerificationError> {
    require_non_blank("applicant", &update.applicant)?;
    require_non_blank("category", &update.category)?;
    require_non_blank("contact_info", &update.contact_info)?;
    require_non_blank("address", &update.address)?;
    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> Result<(), VerificationError> {
    if value.trim().is_empty() {
        return Err(VerificationError::Validation {
            message: format!("{} must not be blank", field),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::VerificationStatus;

    fn valid_update() -> VerificationUpdate {
        VerificationUpdate {
            status: VerificationStatus::Verified,
            category: "Identity".to_string(),
            applicant: "John Smith".to_string(),
            contact_info: "john@example.com".to_string(),
            address: "4 Quay Street".to_string(),
        }
    }

    #[test]
    fn accepts_valid_update() {
        assert!(validate_update(&valid_update()).is_ok());
    }

    #[test]
    fn rejects_blank_applicant() {
        let mut update = valid_update();
        update.applicant = " ".to_string();
        match validate_update(&update) {
            Err(VerificationError::Validation { message }) => {
                assert!(message.contains("applicant"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
