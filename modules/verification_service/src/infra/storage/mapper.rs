//! Entity to model mappers
//!
//! Explicit field-by-field conversions. The surrogate `id` column stops
//! here; an unrecognized status string is a mapping error.

use super::entity;
use crate::contract::{Verification, VerificationFile, VerificationStatus};

impl TryFrom<entity::Model> for Verification {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let status = VerificationStatus::parse(&entity.status).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown status '{}' on verification request {}",
                entity.status,
                entity.request_id
            )
        })?;

        Ok(Self {
            request_id: entity.request_id,
            applicant: entity.applicant,
            category: entity.category,
            submitted_date: entity.submitted_date,
            status,
            contact_info: entity.contact_info,
            address: entity.address,
        })
    }
}

impl From<entity::file::Model> for VerificationFile {
    fn from(entity: entity::file::Model) -> Self {
        Self {
            file_id: entity.file_id,
            document_type: entity.document_type,
            file_link: entity.file_link,
            submitted_date: entity.submitted_date,
            rejection_reason: entity.rejection_reason,
            comment: entity.comment,
        }
    }
}
