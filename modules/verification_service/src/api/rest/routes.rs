//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, patch},
    Extension, Router,
};
use std::sync::Arc;

/// Build the verification router
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/external-doc-verification",
            get(handlers::list_verifications),
        )
        .route(
            "/external-doc-verification/{request_id}",
            get(handlers::get_verification_details),
        )
        .route(
            "/external-doc-verification/{request_id}",
            patch(handlers::update_verification),
        )
        .route(
            "/external-doc-verification/{request_id}",
            delete(handlers::delete_verification),
        )
        .layer(Extension(service))
}
