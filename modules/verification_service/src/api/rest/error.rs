//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::VerificationError;
use axum::http::StatusCode;
use legatora_api::Problem;

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: VerificationError) -> Problem {
    match error {
        VerificationError::NotFound { request_id } => {
            Problem::new(StatusCode::NOT_FOUND, "Verification Request Not Found").with_detail(
                format!("verification request '{}' was not found", request_id),
            )
        }

        VerificationError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        VerificationError::IllegalTransition { from, to } => {
            Problem::new(StatusCode::CONFLICT, "Illegal Status Transition")
                .with_detail(format!("cannot move a {} request to {}", from, to))
        }

        VerificationError::Storage => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
