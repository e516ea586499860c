//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// List-view request DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoaRequestSummaryDto {
    /// Request identifier
    #[schema(example = "POA-4F9A2C1B")]
    pub request_id: String,

    pub principal: String,

    #[schema(example = "Property")]
    pub category: String,

    pub submitted_date: NaiveDate,

    pub assigned_agent: String,

    #[schema(example = "Pending")]
    pub status: String,

    pub contact_info: String,

    pub address: String,
}

/// Attached file DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoaFileDto {
    pub file_id: i64,
    pub document_type: String,
    pub file_link: String,
    pub submitted_date: NaiveDate,
}

/// Detail-view request DTO, including attached files
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoaRequestDetailsDto {
    #[schema(example = "POA-4F9A2C1B")]
    pub request_id: String,

    pub principal: String,

    pub category: String,

    pub submitted_date: NaiveDate,

    pub assigned_agent: String,

    pub status: String,

    pub contact_info: String,

    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,

    pub description_of_power: String,

    pub files: Vec<PoaFileDto>,
}

/// Create/update request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPoaRequestDto {
    pub full_name: String,

    pub contact_info: String,

    pub address: String,

    #[schema(example = "Property")]
    pub category: String,

    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,

    pub description_of_power: String,
}

/// Response for a successful create
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestCreatedResponse {
    pub message: String,

    #[schema(example = "POA-4F9A2C1B")]
    pub request_id: String,

    #[schema(example = "Pending")]
    pub status: String,
}

/// Plain message response for update/delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
