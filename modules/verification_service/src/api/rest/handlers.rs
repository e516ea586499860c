//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::map_domain_error};
use crate::contract::VerificationUpdate;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use legatora_api::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing verification requests
#[derive(Debug, Deserialize)]
pub struct ListVerificationsQuery {
    /// Filter by category; "All" means unfiltered
    pub category: Option<String>,
    /// Filter by status; "All" means unfiltered
    pub status: Option<String>,
    /// "newest" or "oldest" by submission date
    pub sort_by: Option<String>,
}

/// List verification requests with filtering and sorting
pub async fn list_verifications(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<ListVerificationsQuery>,
) -> Result<Json<Vec<VerificationSummaryDto>>, Problem> {
    let verifications = service
        .list_verifications(query.category, query.status, query.sort_by)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(verifications.into_iter().map(Into::into).collect()))
}

/// Get full details for a verification request, including rejection details
pub async fn get_verification_details(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
) -> Result<Json<VerificationDetailsDto>, Problem> {
    let details = service
        .get_verification_details(&request_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(details.into()))
}

/// Replace the updatable fields of a verification request
pub async fn update_verification(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
    Json(req): Json<VerificationUpdateDto>,
) -> Result<Json<MessageResponse>, Problem> {
    let update = VerificationUpdate::try_from(req).map_err(map_domain_error)?;

    service
        .update_verification(&request_id, update)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: format!("External Doc Verification {} updated successfully.", request_id),
    }))
}

/// Delete a verification request and all associated files
pub async fn delete_verification(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service
        .delete_verification(&request_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: format!("External Doc Verification {} deleted successfully.", request_id),
    }))
}
