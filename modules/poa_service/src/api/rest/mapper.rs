//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::PoaRequestSummary> for PoaRequestSummaryDto {
    fn from(summary: contract::PoaRequestSummary) -> Self {
        Self {
            request_id: summary.request_id,
            principal: summary.principal,
            category: summary.category,
            submitted_date: summary.submitted_date,
            assigned_agent: summary.assigned_agent,
            status: summary.status.to_string(),
            contact_info: summary.contact_info,
            address: summary.address,
        }
    }
}

impl From<contract::PoaFile> for PoaFileDto {
    fn from(file: contract::PoaFile) -> Self {
        Self {
            file_id: file.file_id,
            document_type: file.document_type,
            file_link: file.file_link,
            submitted_date: file.submitted_date,
        }
    }
}

impl From<contract::PoaRequestDetails> for PoaRequestDetailsDto {
    fn from(details: contract::PoaRequestDetails) -> Self {
        let request = details.request;
        Self {
            request_id: request.request_id,
            principal: request.principal,
            category: request.category,
            submitted_date: request.submitted_date,
            assigned_agent: request.assigned_agent,
            status: request.status.to_string(),
            contact_info: request.contact_info,
            address: request.address,
            expiration_date: request.expiration_date,
            description_of_power: request.description_of_power,
            files: details.files.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<NewPoaRequestDto> for contract::NewPoaRequest {
    fn from(dto: NewPoaRequestDto) -> Self {
        Self {
            full_name: dto.full_name,
            contact_info: dto.contact_info,
            address: dto.address,
            category: dto.category,
            expiration_date: dto.expiration_date,
            description_of_power: dto.description_of_power,
        }
    }
}
