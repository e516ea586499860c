//! Repository trait for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Verification, VerificationFile, VerificationFilter, VerificationUpdate,
};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for verification requests and their file records
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// List requests matching a normalized filter, in the requested order
    async fn list(&self, filter: &VerificationFilter) -> Result<Vec<Verification>>;

    /// Find a request by its identifier
    async fn find_by_id(&self, request_id: &str) -> Result<Option<Verification>>;

    /// List the file records for a request, in store order
    async fn list_files(&self, request_id: &str) -> Result<Vec<VerificationFile>>;

    /// Replace the updatable fields; returns whether a row matched
    async fn update(&self, request_id: &str, fields: &VerificationUpdate) -> Result<bool>;

    /// Delete a request and its files in one atomic unit, files first;
    /// returns whether the parent existed
    async fn delete(&self, request_id: &str) -> Result<bool>;
}
