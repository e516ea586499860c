//! HTTP request handlers - thin layer that delegates to the domain service

use super::{
    dto::*,
    error::map_domain_error,
};
use crate::contract::RequestStatus;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use legatora_api::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing requests
#[derive(Debug, Deserialize)]
pub struct ListPoaRequestsQuery {
    /// Filter by category; "All" means unfiltered
    pub category: Option<String>,
    /// Filter by status; "All" means unfiltered
    pub status: Option<String>,
    /// "newest" or "oldest" by submission date
    pub sort_by: Option<String>,
    /// Substring match over principal or assigned agent
    pub search: Option<String>,
}

/// List POA requests with filtering, sorting and search
pub async fn list_poa_requests(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<ListPoaRequestsQuery>,
) -> Result<Json<Vec<PoaRequestSummaryDto>>, Problem> {
    let requests = service
        .list_requests(query.category, query.status, query.sort_by, query.search)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

/// Get full details for a request, including attached documents
pub async fn get_poa_request_details(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
) -> Result<Json<PoaRequestDetailsDto>, Problem> {
    let details = service
        .get_request_details(&request_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(details.into()))
}

/// Create a new POA request
pub async fn create_poa_request(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<NewPoaRequestDto>,
) -> Result<(StatusCode, Json<RequestCreatedResponse>), Problem> {
    let request_id = service
        .create_request(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(RequestCreatedResponse {
            message: "POA Request submitted successfully".to_string(),
            request_id,
            status: RequestStatus::Pending.to_string(),
        }),
    ))
}

/// Replace the mutable fields of an existing request
pub async fn update_poa_request(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
    Json(req): Json<NewPoaRequestDto>,
) -> Result<Json<MessageResponse>, Problem> {
    service
        .update_request(&request_id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: format!("POA Request {} updated successfully.", request_id),
    }))
}

/// Delete a request and all associated files
pub async fn delete_poa_request(
    Extension(service): Extension<Arc<Service>>,
    Path(request_id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service
        .delete_request(&request_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: format!("POA Request {} deleted successfully.", request_id),
    }))
}
