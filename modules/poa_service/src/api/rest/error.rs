//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::PoaError;
use axum::http::StatusCode;
use legatora_api::Problem;

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: PoaError) -> Problem {
    match error {
        PoaError::NotFound { request_id } => {
            Problem::new(StatusCode::NOT_FOUND, "POA Request Not Found")
                .with_detail(format!("POA request '{}' was not found", request_id))
        }

        PoaError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        PoaError::Storage => Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .with_detail("An unexpected error occurred"),
    }
}
