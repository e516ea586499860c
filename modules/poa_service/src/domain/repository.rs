//! Repository trait for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewPoaRequest, PoaFile, PoaRequest, PoaRequestSummary, RequestFilter};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for POA requests and their attached files
#[async_trait]
pub trait PoaRequestRepository: Send + Sync {
    /// List requests matching a normalized filter, in the requested order
    async fn list(&self, filter: &RequestFilter) -> Result<Vec<PoaRequestSummary>>;

    /// Find a request by its identifier
    async fn find_by_id(&self, request_id: &str) -> Result<Option<PoaRequest>>;

    /// List the files attached to a request, in store order
    async fn list_files(&self, request_id: &str) -> Result<Vec<PoaFile>>;

    /// Insert a new request. Must fail on a duplicate `request_id`,
    /// never overwrite.
    async fn insert(&self, request: &PoaRequest) -> Result<()>;

    /// Replace the mutable fields of a request; returns whether a row matched
    async fn update(&self, request_id: &str, fields: &NewPoaRequest) -> Result<bool>;

    /// Delete a request and its files in one atomic unit, files first;
    /// returns whether the parent existed
    async fn delete(&self, request_id: &str) -> Result<bool>;
}
