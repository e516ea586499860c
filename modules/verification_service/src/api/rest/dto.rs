//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// List-view verification request DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationSummaryDto {
    #[schema(example = "EXT-2024-0042")]
    pub request_id: String,

    pub applicant: String,

    #[schema(example = "Identity")]
    pub category: String,

    pub submitted_date: NaiveDate,

    #[schema(example = "Pending")]
    pub status: String,

    pub contact_info: String,

    pub address: String,
}

/// Submitted file DTO, including rejection details when present
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationFileDto {
    pub file_id: i64,

    pub document_type: String,

    pub file_link: String,

    pub submitted_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Detail-view DTO, including submitted files
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationDetailsDto {
    pub request_id: String,

    pub applicant: String,

    pub category: String,

    pub submitted_date: NaiveDate,

    pub status: String,

    pub contact_info: String,

    pub address: String,

    pub files: Vec<VerificationFileDto>,
}

/// Update request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerificationUpdateDto {
    #[schema(example = "Verified")]
    pub status: String,

    pub category: String,

    pub applicant: String,

    pub contact_info: String,

    pub address: String,
}

/// Plain message response for update/delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
