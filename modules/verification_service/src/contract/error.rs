//! Contract error types for the verification service

use super::model::VerificationStatus;

/// Verification service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// No verification request with the given identifier
    NotFound {
        /// Request identifier
        request_id: String,
    },
    /// Input rejected before any storage call
    Validation {
        /// Validation error message
        message: String,
    },
    /// Status change outside the legal transition set
    IllegalTransition {
        from: VerificationStatus,
        to: VerificationStatus,
    },
    /// Storage failure; the cause is logged, never surfaced
    Storage,
}

impl std::fmt::Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { request_id } => {
                write!(f, "verification request not found: {}", request_id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::IllegalTransition { from, to } => {
                write!(f, "illegal status transition: {} -> {}", from, to)
            }
            Self::Storage => {
                write!(f, "Storage error")
            }
        }
    }
}

impl std::error::Error for VerificationError {}
