//! Domain service - business logic orchestration

use super::repository::VerificationRepository;
use super::validation;
use crate::contract::{
    Verification, VerificationDetails, VerificationError, VerificationFilter, VerificationUpdate,
};
use std::sync::Arc;

/// Domain service for external document verification management
pub struct Service {
    repo: Arc<dyn VerificationRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn VerificationRepository>) -> Self {
        Self { repo }
    }

    /// List verification requests with optional category/status filters
    /// and submitted-date ordering
    pub async fn list_verifications(
        &self,
        category: Option<String>,
        status: Option<String>,
        sort_by: Option<String>,
    ) -> Result<Vec<Verification>, VerificationError> {
        let filter = VerificationFilter::new(category, status, sort_by);
        self.repo.list(&filter).await.map_err(storage_error)
    }

    /// Full detail view: the request plus its file records, including
    /// any rejection details. Two independent reads.
    pub async fn get_verification_details(
        &self,
        request_id: &str,
    ) -> Result<VerificationDetails, VerificationError> {
        let verification = self
            .repo
            .find_by_id(request_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| VerificationError::NotFound {
                request_id: request_id.to_string(),
            })?;

        let files = self
            .repo
            .list_files(request_id)
            .await
            .map_err(storage_error)?;

        Ok(VerificationDetails {
            verification,
            files,
        })
    }

    /// Replace the updatable fields of a request.
    ///
    /// A status change must be a legal transition from the stored
    /// status; illegal transitions are rejected before the write.
    pub async fn update_verification(
        &self,
        request_id: &str,
        update: VerificationUpdate,
    ) -> Result<(), VerificationError> {
        validation::validate_update(&update)?;

        let current = self
            .repo
            .find_by_id(request_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| VerificationError::NotFound {
                request_id: request_id.to_string(),
            })?;

        if !current.status.can_transition(update.status) {
            return Err(VerificationError::IllegalTransition {
                from: current.status,
                to: update.status,
            });
        }

        let matched = self
            .repo
            .update(request_id, &update)
            .await
            .map_err(storage_error)?;

        if !matched {
            return Err(VerificationError::NotFound {
                request_id: request_id.to_string(),
            });
        }

        Ok(())
    }

    /// Delete a request and all of its file records.
    pub async fn delete_verification(&self, request_id: &str) -> Result<(), VerificationError> {
        let existed = self
            .repo
            .delete(request_id)
            .await
            .map_err(storage_error)?;

        if !existed {
            return Err(VerificationError::NotFound {
                request_id: request_id.to_string(),
            });
        }

        tracing::info!(%request_id, "verification request deleted");
        Ok(())
    }
}

fn storage_error(err: anyhow::Error) -> VerificationError {
    tracing::error!(error = ?err, "verification storage operation failed");
    VerificationError::Storage
}
