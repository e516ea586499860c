//! Domain service - business logic orchestration

use super::repository::PoaRequestRepository;
use super::validation;
use crate::config::Config;
use crate::contract::{
    NewPoaRequest, PoaError, PoaRequest, PoaRequestDetails, PoaRequestSummary, RequestFilter,
    RequestStatus,
};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for POA request management
pub struct Service {
    repo: Arc<dyn PoaRequestRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn PoaRequestRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// List requests with optional category/status filters, free-text
    /// search over principal or assigned agent, and submitted-date
    /// ordering. Empty matches yield an empty list.
    pub async fn list_requests(
        &self,
        category: Option<String>,
        status: Option<String>,
        sort_by: Option<String>,
        search: Option<String>,
    ) -> Result<Vec<PoaRequestSummary>, PoaError> {
        let filter = RequestFilter::new(category, status, sort_by, search);
        self.repo.list(&filter).await.map_err(storage_error)
    }

    /// Full detail view: the parent record plus its attached files.
    ///
    /// Two independent reads; an inconsistency window between them is
    /// accepted.
    pub async fn get_request_details(
        &self,
        request_id: &str,
    ) -> Result<PoaRequestDetails, PoaError> {
        let request = self
            .repo
            .find_by_id(request_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| PoaError::NotFound {
                request_id: request_id.to_string(),
            })?;

        let files = self
            .repo
            .list_files(request_id)
            .await
            .map_err(storage_error)?;

        Ok(PoaRequestDetails { request, files })
    }

    /// Create a new request and return its server-generated identifier.
    ///
    /// Status starts Pending and the agent starts as the configured
    /// unassigned marker. A duplicate identifier is rejected by the
    /// store and propagates as a storage failure.
    pub async fn create_request(&self, input: NewPoaRequest) -> Result<String, PoaError> {
        validation::validate_new_request(&input)?;

        let request = PoaRequest {
            request_id: generate_request_id(),
            principal: input.full_name,
            category: input.category,
            submitted_date: chrono::Utc::now().date_naive(),
            assigned_agent: self.config.default_assigned_agent.clone(),
            status: RequestStatus::Pending,
            contact_info: input.contact_info,
            address: input.address,
            expiration_date: input.expiration_date,
            description_of_power: input.description_of_power,
        };

        self.repo.insert(&request).await.map_err(storage_error)?;

        tracing::info!(request_id = %request.request_id, "POA request created");
        Ok(request.request_id)
    }

    /// Replace the mutable fields of an existing request. Identity,
    /// submission date, status and assigned agent are untouched.
    pub async fn update_request(
        &self,
        request_id: &str,
        input: NewPoaRequest,
    ) -> Result<(), PoaError> {
        validation::validate_new_request(&input)?;

        let matched = self
            .repo
            .update(request_id, &input)
            .await
            .map_err(storage_error)?;

        if !matched {
            return Err(PoaError::NotFound {
                request_id: request_id.to_string(),
            });
        }

        Ok(())
    }

    /// Delete a request and all of its files.
    pub async fn delete_request(&self, request_id: &str) -> Result<(), PoaError> {
        let existed = self
            .repo
            .delete(request_id)
            .await
            .map_err(storage_error)?;

        if !existed {
            return Err(PoaError::NotFound {
                request_id: request_id.to_string(),
            });
        }

        tracing::info!(%request_id, "POA request deleted");
        Ok(())
    }
}

/// New identifier: `POA-` + the first 8 hex chars of a v4 UUID,
/// uppercased. The id space makes collisions negligible; the unique
/// constraint catches the rest.
fn generate_request_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("POA-{}", hex[..8].to_uppercase())
}

fn storage_error(err: anyhow::Error) -> PoaError {
    tracing::error!(error = ?err, "POA storage operation failed");
    PoaError::Storage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_the_documented_shape() {
        for _ in 0..32 {
            let id = generate_request_id();
            let hex = id.strip_prefix("POA-").unwrap();
            assert_eq!(hex.len(), 8);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }
}
