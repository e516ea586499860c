//! External Document Verification Service Module
//!
//! Read/update/delete over externally submitted document verification
//! requests. Requests and their file records are seeded by the intake
//! pipeline; this module never creates them.

// Public exports
pub mod contract;
pub use contract::{
    error::VerificationError, Verification, VerificationDetails, VerificationFile,
    VerificationFilter, VerificationStatus, VerificationUpdate,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
