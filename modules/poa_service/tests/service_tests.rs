//! Integration tests for the POA request service

use chrono::NaiveDate;
use poa_service::domain::repository::PoaRequestRepository;
use poa_service::domain::Service;
use poa_service::{
    Config, NewPoaRequest, PoaError, PoaFile, PoaRequest, PoaRequestSummary, RequestFilter,
    RequestStatus, SortOrder,
};
use std::sync::Arc;

// Mock repository implementation for testing
pub mod mocks {
    use super::*;
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use parking_lot::RwLock;

    #[derive(Clone, Default)]
    pub struct MockPoaRepo {
        requests: Arc<RwLock<Vec<PoaRequest>>>,
        files: Arc<RwLock<Vec<(String, PoaFile)>>>,
    }

    impl MockPoaRepo {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a request directly, bypassing the service (mirrors
        /// externally populated rows).
        pub fn seed_request(&self, request: PoaRequest) {
            self.requests.write().push(request);
        }

        /// Attach a file to a request (files arrive via the upload
        /// collaborator, outside this service).
        pub fn seed_file(&self, request_id: &str, file: PoaFile) {
            self.files.write().push((request_id.to_string(), file));
        }

        pub fn request_count(&self) -> usize {
            self.requests.read().len()
        }

        pub fn files_for(&self, request_id: &str) -> Vec<PoaFile> {
            self.files
                .read()
                .iter()
                .filter(|(id, _)| id == request_id)
                .map(|(_, f)| f.clone())
                .collect()
        }

        fn matches(request: &PoaRequest, filter: &RequestFilter) -> bool {
            if let Some(category) = &filter.category {
                if &request.category != category {
                    return false;
                }
            }
            if let Some(status) = &filter.status {
                if request.status.as_str() != status {
                    return false;
                }
            }
            if let Some(term) = &filter.search {
                if !request.principal.contains(term.as_str())
                    && !request.assigned_agent.contains(term.as_str())
                {
                    return false;
                }
            }
            true
        }

        fn summarize(request: &PoaRequest) -> PoaRequestSummary {
            PoaRequestSummary {
                request_id: request.request_id.clone(),
                principal: request.principal.clone(),
                category: request.category.clone(),
                submitted_date: request.submitted_date,
                assigned_agent: request.assigned_agent.clone(),
                status: request.status,
                contact_info: request.contact_info.clone(),
                address: request.address.clone(),
            }
        }
    }

    #[async_trait]
    impl PoaRequestRepository for MockPoaRepo {
        async fn list(&self, filter: &RequestFilter) -> Result<Vec<PoaRequestSummary>> {
            let requests = self.requests.read();
            let mut matched: Vec<&PoaRequest> = requests
                .iter()
                .filter(|r| Self::matches(r, filter))
                .collect();

            match filter.sort {
                Some(SortOrder::Newest) => {
                    matched.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date))
                }
                Some(SortOrder::Oldest) => {
                    matched.sort_by(|a, b| a.submitted_date.cmp(&b.submitted_date))
                }
                None => {}
            }

            Ok(matched.into_iter().map(Self::summarize).collect())
        }

        async fn find_by_id(&self, request_id: &str) -> Result<Option<PoaRequest>> {
            Ok(self
                .requests
                .read()
                .iter()
                .find(|r| r.request_id == request_id)
                .cloned())
        }

        async fn list_files(&self, request_id: &str) -> Result<Vec<PoaFile>> {
            Ok(self.files_for(request_id))
        }

        async fn insert(&self, request: &PoaRequest) -> Result<()> {
            let mut requests = self.requests.write();
            if requests.iter().any(|r| r.request_id == request.request_id) {
                bail!("duplicate request_id: {}", request.request_id);
            }
            requests.push(request.clone());
            Ok(())
        }

        async fn update(&self, request_id: &str, fields: &NewPoaRequest) -> Result<bool> {
            let mut requests = self.requests.write();
            match requests.iter_mut().find(|r| r.request_id == request_id) {
                Some(request) => {
                    request.principal = fields.full_name.clone();
                    request.contact_info = fields.contact_info.clone();
                    request.address = fields.address.clone();
                    request.category = fields.category.clone();
                    request.expiration_date = fields.expiration_date;
                    request.description_of_power = fields.description_of_power.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, request_id: &str) -> Result<bool> {
            self.files.write().retain(|(id, _)| id != request_id);
            let mut requests = self.requests.write();
            let before = requests.len();
            requests.retain(|r| r.request_id != request_id);
            Ok(requests.len() < before)
        }
    }
}

fn create_test_service() -> (Service, Arc<mocks::MockPoaRepo>) {
    let repo = Arc::new(mocks::MockPoaRepo::new());
    let service = Service::new(repo.clone(), Config::default());
    (service, repo)
}

fn new_request_input(full_name: &str, category: &str) -> NewPoaRequest {
    NewPoaRequest {
        full_name: full_name.to_string(),
        contact_info: "contact@example.com".to_string(),
        address: "12 Harbor Lane".to_string(),
        category: category.to_string(),
        expiration_date: None,
        description_of_power: "Manage affairs".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_request(request_id: &str, principal: &str, agent: &str, submitted: NaiveDate) -> PoaRequest {
    PoaRequest {
        request_id: request_id.to_string(),
        principal: principal.to_string(),
        category: "Property".to_string(),
        submitted_date: submitted,
        assigned_agent: agent.to_string(),
        status: RequestStatus::Pending,
        contact_info: "contact@example.com".to_string(),
        address: "12 Harbor Lane".to_string(),
        expiration_date: None,
        description_of_power: "Manage affairs".to_string(),
    }
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let (service, _repo) = create_test_service();

    let input = new_request_input("Jane Doe", "Property");
    let request_id = service
        .create_request(input.clone())
        .await
        .expect("create failed");

    // POA- followed by 8 uppercase hex chars
    let hex = request_id.strip_prefix("POA-").expect("missing POA- prefix");
    assert_eq!(hex.len(), 8);
    assert!(hex
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));

    let details = service
        .get_request_details(&request_id)
        .await
        .expect("details failed");

    assert_eq!(details.request.principal, input.full_name);
    assert_eq!(details.request.contact_info, input.contact_info);
    assert_eq!(details.request.address, input.address);
    assert_eq!(details.request.category, input.category);
    assert_eq!(details.request.description_of_power, input.description_of_power);
    assert_eq!(details.request.status, RequestStatus::Pending);
    assert_eq!(details.request.assigned_agent, "Unassigned");
    assert!(details.files.is_empty());
}

#[tokio::test]
async fn list_applies_every_supplied_filter() {
    let (service, repo) = create_test_service();

    service
        .create_request(new_request_input("Jane Doe", "Property"))
        .await
        .expect("create failed");
    service
        .create_request(new_request_input("John Smith", "Medical"))
        .await
        .expect("create failed");

    let mut active = seeded_request("POA-AAAA0001", "Ada Lovelace", "Grace Hopper", date(2025, 3, 1));
    active.status = RequestStatus::Active;
    repo.seed_request(active);

    // Category alone
    let property = service
        .list_requests(Some("Property".to_string()), None, None, None)
        .await
        .expect("list failed");
    assert_eq!(property.len(), 2);
    assert!(property.iter().all(|r| r.category == "Property"));

    // Category AND status
    let pending_property = service
        .list_requests(
            Some("Property".to_string()),
            Some("Pending".to_string()),
            None,
            None,
        )
        .await
        .expect("list failed");
    assert_eq!(pending_property.len(), 1);
    assert_eq!(pending_property[0].principal, "Jane Doe");

    // The "All" sentinel means unfiltered
    let all = service
        .list_requests(Some("All".to_string()), Some("All".to_string()), None, None)
        .await
        .expect("list failed");
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn search_matches_principal_or_assigned_agent() {
    let (service, repo) = create_test_service();

    repo.seed_request(seeded_request(
        "POA-AAAA0001",
        "Jane Doe",
        "Unassigned",
        date(2025, 1, 10),
    ));
    repo.seed_request(seeded_request(
        "POA-AAAA0002",
        "John Smith",
        "Agent Carter",
        date(2025, 1, 11),
    ));

    let by_principal = service
        .list_requests(None, None, None, Some("Jane".to_string()))
        .await
        .expect("list failed");
    assert_eq!(by_principal.len(), 1);
    assert_eq!(by_principal[0].request_id, "POA-AAAA0001");

    let by_agent = service
        .list_requests(None, None, None, Some("Carter".to_string()))
        .await
        .expect("list failed");
    assert_eq!(by_agent.len(), 1);
    assert_eq!(by_agent[0].request_id, "POA-AAAA0002");

    let no_match = service
        .list_requests(None, None, None, Some("Zebra".to_string()))
        .await
        .expect("list failed");
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn sort_orders_by_submitted_date() {
    let (service, repo) = create_test_service();

    repo.seed_request(seeded_request("POA-AAAA0001", "A", "Unassigned", date(2025, 2, 1)));
    repo.seed_request(seeded_request("POA-AAAA0002", "B", "Unassigned", date(2025, 3, 1)));
    repo.seed_request(seeded_request("POA-AAAA0003", "C", "Unassigned", date(2025, 1, 1)));

    let newest = service
        .list_requests(None, None, Some("newest".to_string()), None)
        .await
        .expect("list failed");
    assert!(newest
        .windows(2)
        .all(|w| w[0].submitted_date >= w[1].submitted_date));

    let oldest = service
        .list_requests(None, None, Some("oldest".to_string()), None)
        .await
        .expect("list failed");
    assert!(oldest
        .windows(2)
        .all(|w| w[0].submitted_date <= w[1].submitted_date));

    // Unknown sort token leaves the store order untouched
    let unsorted = service
        .list_requests(None, None, Some("sideways".to_string()), None)
        .await
        .expect("list failed");
    let ids: Vec<_> = unsorted.iter().map(|r| r.request_id.as_str()).collect();
    assert_eq!(ids, ["POA-AAAA0001", "POA-AAAA0002", "POA-AAAA0003"]);
}

#[tokio::test]
async fn details_aggregate_parent_and_files() {
    let (service, repo) = create_test_service();

    let request_id = service
        .create_request(new_request_input("Jane Doe", "Property"))
        .await
        .expect("create failed");

    repo.seed_file(
        &request_id,
        PoaFile {
            file_id: 1,
            document_type: "Deed".to_string(),
            file_link: "https://files.example.com/deed.pdf".to_string(),
            submitted_date: date(2025, 4, 2),
        },
    );
    repo.seed_file(
        &request_id,
        PoaFile {
            file_id: 2,
            document_type: "ID".to_string(),
            file_link: "https://files.example.com/id.pdf".to_string(),
            submitted_date: date(2025, 4, 3),
        },
    );

    let details = service
        .get_request_details(&request_id)
        .await
        .expect("details failed");

    assert_eq!(details.files.len(), 2);
    assert_eq!(details.files[0].document_type, "Deed");
    assert_eq!(details.files[1].document_type, "ID");
}

#[tokio::test]
async fn delete_cascades_and_is_idempotent() {
    let (service, repo) = create_test_service();

    let request_id = service
        .create_request(new_request_input("Jane Doe", "Property"))
        .await
        .expect("create failed");
    repo.seed_file(
        &request_id,
        PoaFile {
            file_id: 1,
            document_type: "Deed".to_string(),
            file_link: "https://files.example.com/deed.pdf".to_string(),
            submitted_date: date(2025, 4, 2),
        },
    );

    service
        .delete_request(&request_id)
        .await
        .expect("first delete failed");

    assert!(repo.files_for(&request_id).is_empty());
    assert_eq!(repo.request_count(), 0);

    // Second delete reports not found rather than a generic failure
    match service.delete_request(&request_id).await {
        Err(PoaError::NotFound { request_id: id }) => assert_eq!(id, request_id),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_request_reports_not_found_everywhere() {
    let (service, _repo) = create_test_service();

    let missing = "POA-DEADBEEF";

    assert!(matches!(
        service.get_request_details(missing).await,
        Err(PoaError::NotFound { .. })
    ));
    assert!(matches!(
        service
            .update_request(missing, new_request_input("Jane Doe", "Property"))
            .await,
        Err(PoaError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_request(missing).await,
        Err(PoaError::NotFound { .. })
    ));
}

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
    let (service, _repo) = create_test_service();

    let request_id = service
        .create_request(new_request_input("Jane Doe", "Property"))
        .await
        .expect("create failed");

    let before = service
        .get_request_details(&request_id)
        .await
        .expect("details failed");

    let mut updated = new_request_input("Jane A. Doe", "Medical");
    updated.expiration_date = Some(date(2030, 6, 30));
    service
        .update_request(&request_id, updated)
        .await
        .expect("update failed");

    let after = service
        .get_request_details(&request_id)
        .await
        .expect("details failed");

    assert_eq!(after.request.principal, "Jane A. Doe");
    assert_eq!(after.request.category, "Medical");
    assert_eq!(after.request.expiration_date, Some(date(2030, 6, 30)));

    // Server-assigned fields survive the replace
    assert_eq!(after.request.request_id, request_id);
    assert_eq!(after.request.submitted_date, before.request.submitted_date);
    assert_eq!(after.request.status, before.request.status);
    assert_eq!(after.request.assigned_agent, before.request.assigned_agent);
}

#[tokio::test]
async fn blank_input_is_rejected_before_storage() {
    let (service, repo) = create_test_service();

    let mut input = new_request_input("", "Property");
    input.full_name = "  ".to_string();

    assert!(matches!(
        service.create_request(input).await,
        Err(PoaError::Validation { .. })
    ));
    assert_eq!(repo.request_count(), 0);
}

#[tokio::test]
async fn property_scenario_filters_by_category() {
    let (service, _repo) = create_test_service();

    let mut input = new_request_input("Jane Doe", "Property");
    input.description_of_power = "Manage property".to_string();

    let request_id = service.create_request(input).await.expect("create failed");

    let property = service
        .list_requests(Some("Property".to_string()), None, None, None)
        .await
        .expect("list failed");
    assert!(property.iter().any(|r| r.request_id == request_id));

    let medical = service
        .list_requests(Some("Medical".to_string()), None, None, None)
        .await
        .expect("list failed");
    assert!(medical.iter().all(|r| r.request_id != request_id));
}

#[tokio::test]
async fn configured_agent_marker_is_applied() {
    let repo = Arc::new(mocks::MockPoaRepo::new());
    let config = Config {
        default_assigned_agent: "Awaiting assignment".to_string(),
    };
    let service = Service::new(repo.clone(), config);

    let request_id = service
        .create_request(new_request_input("Jane Doe", "Property"))
        .await
        .expect("create failed");

    let details = service
        .get_request_details(&request_id)
        .await
        .expect("details failed");
    assert_eq!(details.request.assigned_agent, "Awaiting assignment");
}
