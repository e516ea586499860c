//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, VerificationError, VerificationStatus};

impl From<contract::Verification> for VerificationSummaryDto {
    fn from(verification: contract::Verification) -> Self {
        Self {
            request_id: verification.request_id,
            applicant: verification.applicant,
            category: verification.category,
            submitted_date: verification.submitted_date,
            status: verification.status.to_string(),
            contact_info: verification.contact_info,
            address: verification.address,
        }
    }
}

impl From<contract::VerificationFile> for VerificationFileDto {
    fn from(file: contract::VerificationFile) -> Self {
        Self {
            file_id: file.file_id,
            document_type: file.document_type,
            file_link: file.file_link,
            submitted_date: file.submitted_date,
            rejection_reason: file.rejection_reason,
            comment: file.comment,
        }
    }
}

impl From<contract::VerificationDetails> for VerificationDetailsDto {
    fn from(details: contract::VerificationDetails) -> Self {
        let verification = details.verification;
        Self {
            request_id: verification.request_id,
            applicant: verification.applicant,
            category: verification.category,
            submitted_date: verification.submitted_date,
            status: verification.status.to_string(),
            contact_info: verification.contact_info,
            address: verification.address,
            files: details.files.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<VerificationUpdateDto> for contract::VerificationUpdate {
    type Error = VerificationError;

    fn try_from(dto: VerificationUpdateDto) -> Result<Self, Self::Error> {
        let status = VerificationStatus::parse(&dto.status).ok_or_else(|| {
            VerificationError::Validation {
                message: format!("unknown status '{}'", dto.status),
            }
        })?;

        Ok(Self {
            status,
            category: dto.category,
            applicant: dto.applicant,
            contact_info: dto.contact_info,
            address: dto.address,
        })
    }
}
