//! Entity to model mappers
//!
//! Explicit field-by-field conversions between SeaORM entities and
//! contract models. The surrogate `id` column stops here; a row with an
//! unrecognized status string is a mapping error, not a silently
//! malformed record.

use super::entity;
use crate::contract::{PoaFile, PoaRequest, PoaRequestSummary, RequestStatus};

// ===== Request Conversions =====

impl TryFrom<entity::Model> for PoaRequest {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let status = parse_status(&entity.status, &entity.request_id)?;

        Ok(Self {
            request_id: entity.request_id,
            principal: entity.principal,
            category: entity.category,
            submitted_date: entity.submitted_date,
            assigned_agent: entity.assigned_agent,
            status,
            contact_info: entity.contact_info,
            address: entity.address,
            expiration_date: entity.expiration_date,
            description_of_power: entity.description_of_power,
        })
    }
}

impl TryFrom<entity::Model> for PoaRequestSummary {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let status = parse_status(&entity.status, &entity.request_id)?;

        Ok(Self {
            request_id: entity.request_id,
            principal: entity.principal,
            category: entity.category,
            submitted_date: entity.submitted_date,
            assigned_agent: entity.assigned_agent,
            status,
            contact_info: entity.contact_info,
            address: entity.address,
        })
    }
}

impl From<&PoaRequest> for entity::ActiveModel {
    fn from(model: &PoaRequest) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            id: NotSet,
            request_id: Set(model.request_id.clone()),
            principal: Set(model.principal.clone()),
            category: Set(model.category.clone()),
            submitted_date: Set(model.submitted_date),
            assigned_agent: Set(model.assigned_agent.clone()),
            status: Set(model.status.as_str().to_string()),
            contact_info: Set(model.contact_info.clone()),
            address: Set(model.address.clone()),
            expiration_date: Set(model.expiration_date),
            description_of_power: Set(model.description_of_power.clone()),
        }
    }
}

// ===== File Conversions =====

impl From<entity::file::Model> for PoaFile {
    fn from(entity: entity::file::Model) -> Self {
        Self {
            file_id: entity.file_id,
            document_type: entity.document_type,
            file_link: entity.file_link,
            submitted_date: entity.submitted_date,
        }
    }
}

fn parse_status(raw: &str, request_id: &str) -> anyhow::Result<RequestStatus> {
    RequestStatus::parse(raw)
        .ok_or_else(|| anyhow::anyhow!("unknown status '{}' on POA request {}", raw, request_id))
}
