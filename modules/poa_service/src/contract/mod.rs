//! Contract layer - public models and errors for the POA service
//!
//! This layer contains transport-agnostic models.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::PoaError;
pub use model::{
    NewPoaRequest, PoaFile, PoaRequest, PoaRequestDetails, PoaRequestSummary, RequestFilter,
    RequestStatus, SortOrder,
};
