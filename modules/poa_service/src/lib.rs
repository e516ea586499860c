//! POA Request Service Module
//!
//! CRUD over Power-of-Attorney requests for the Legatora admin portal.
//! A request owns zero or more attached document files; the two are
//! created and destroyed together.

// Public exports
pub mod contract;
pub use contract::{
    error::PoaError, NewPoaRequest, PoaFile, PoaRequest, PoaRequestDetails, PoaRequestSummary,
    RequestFilter, RequestStatus, SortOrder,
};

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
