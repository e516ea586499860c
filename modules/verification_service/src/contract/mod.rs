//! Contract layer - public models and errors for the verification service
//!
//! Transport-agnostic models. NO serde derives.

pub mod error;
pub mod model;

pub use error::VerificationError;
pub use model::{
    Verification, VerificationDetails, VerificationFile, VerificationFilter, VerificationStatus,
    VerificationUpdate,
};
