//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the POA request router
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/poa-requests", get(handlers::list_poa_requests))
        .route("/poa-requests", post(handlers::create_poa_request))
        .route(
            "/poa-requests/{request_id}",
            get(handlers::get_poa_request_details),
        )
        .route(
            "/poa-requests/{request_id}",
            patch(handlers::update_poa_request),
        )
        .route(
            "/poa-requests/{request_id}",
            delete(handlers::delete_poa_request),
        )
        .layer(Extension(service))
}
