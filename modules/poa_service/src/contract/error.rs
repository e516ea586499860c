//! Contract error types for the POA request service
//!
//! These errors are transport-agnostic.

/// POA service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoaError {
    /// No request with the given identifier
    NotFound {
        /// Request identifier
        request_id: String,
    },
    /// Input rejected before any storage call
    Validation {
        /// Validation error message
        message: String,
    },
    /// Storage failure; the cause is logged, never surfaced
    Storage,
}

impl std::fmt::Display for PoaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { request_id } => {
                write!(f, "POA request not found: {}", request_id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Storage => {
                write!(f, "Storage error")
            }
        }
    }
}

impl std::error::Error for PoaError {}
