//! Contract models for the POA request service
//!
//! These models are transport-agnostic. NO serde derives - these are
//! pure domain models.

use chrono::NaiveDate;

/// Filter sentinel meaning "no filter" on category/status
pub const FILTER_ALL: &str = "All";

/// A Power-of-Attorney request as stored, without attached files.
///
/// The store's internal surrogate key is dropped here; `request_id` is
/// the only identity the rest of the system sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoaRequest {
    /// Request identifier (`POA-` + 8 uppercase hex chars), immutable
    pub request_id: String,
    /// Principal granting the power
    pub principal: String,
    /// POA category (e.g. "Property", "Medical")
    pub category: String,
    /// Submission date, set once at creation
    pub submitted_date: NaiveDate,
    /// Assigned agent, or the configured unassigned marker
    pub assigned_agent: String,
    /// Request status
    pub status: RequestStatus,
    pub contact_info: String,
    pub address: String,
    /// Optional expiration date of the granted power
    pub expiration_date: Option<NaiveDate>,
    pub description_of_power: String,
}

/// List-view projection of a request (the columns the list endpoint returns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoaRequestSummary {
    pub request_id: String,
    pub principal: String,
    pub category: String,
    pub submitted_date: NaiveDate,
    pub assigned_agent: String,
    pub status: RequestStatus,
    pub contact_info: String,
    pub address: String,
}

/// A document file attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoaFile {
    /// Store-assigned file identifier
    pub file_id: i64,
    pub document_type: String,
    pub file_link: String,
    pub submitted_date: NaiveDate,
}

/// Composite detail view: parent record plus its attached files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoaRequestDetails {
    pub request: PoaRequest,
    pub files: Vec<PoaFile>,
}

/// Input for creating or replacing a request.
///
/// `full_name` maps onto the stored `principal` column. Identity,
/// submission date, status and assigned agent are never part of this
/// input - they are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoaRequest {
    pub full_name: String,
    pub contact_info: String,
    pub address: String,
    pub category: String,
    pub expiration_date: Option<NaiveDate>,
    pub description_of_power: String,
}

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// Awaiting review; the default for new requests
    Pending,
    /// Approved and in effect
    Active,
    /// Rejected during review
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Active" => Some(Self::Active),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    ///
    /// Pending requests may be activated or rejected; Active and
    /// Rejected are terminal. Re-asserting the current status is
    /// always allowed.
    pub fn can_transition(self, next: Self) -> bool {
        self == next || matches!((self, next), (Self::Pending, Self::Active | Self::Rejected))
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering over `submitted_date` for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// `submitted_date` descending
    Newest,
    /// `submitted_date` ascending
    Oldest,
}

impl SortOrder {
    /// Parse the wire token. Anything other than "newest"/"oldest"
    /// (including absence) leaves the store-default order in place.
    pub fn from_param(sort_by: Option<&str>) -> Option<Self> {
        match sort_by {
            Some("newest") => Some(Self::Newest),
            Some("oldest") => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Normalized list-query filter.
///
/// Construction is the only way to obtain one, so every consumer sees
/// the same sentinel handling: a category/status of "All" (or blank)
/// means unfiltered, as does a blank search term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

impl RequestFilter {
    pub fn new(
        category: Option<String>,
        status: Option<String>,
        sort_by: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self {
            category: normalize_facet(category),
            status: normalize_facet(status),
            search: search.filter(|s| !s.trim().is_empty()),
            sort: SortOrder::from_param(sort_by.as_deref()),
        }
    }
}

fn normalize_facet(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != FILTER_ALL)
}
