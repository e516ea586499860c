//! Contract models for the external document verification service

use chrono::NaiveDate;

/// Filter sentinel meaning "no filter" on category/status
pub const FILTER_ALL: &str = "All";

/// An external document verification request, without file records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Request identifier, immutable
    pub request_id: String,
    /// Applicant who submitted the documents
    pub applicant: String,
    pub category: String,
    pub submitted_date: NaiveDate,
    pub status: VerificationStatus,
    pub contact_info: String,
    pub address: String,
}

/// A submitted document file.
///
/// `rejection_reason` and `comment` are populated by the reviewer
/// pipeline when a file is rejected; this service only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFile {
    pub file_id: i64,
    pub document_type: String,
    pub file_link: String,
    pub submitted_date: NaiveDate,
    pub rejection_reason: Option<String>,
    pub comment: Option<String>,
}

/// Composite detail view: request plus its file records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationDetails {
    pub verification: Verification,
    pub files: Vec<VerificationFile>,
}

/// Replacement fields for the update path.
///
/// Unlike the POA update path, status is part of the input here; the
/// change is gated by [`VerificationStatus::can_transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationUpdate {
    pub status: VerificationStatus,
    pub category: String,
    pub applicant: String,
    pub contact_info: String,
    pub address: String,
}

/// Verification status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Awaiting review
    Pending,
    /// Documents verified
    Verified,
    /// Documents rejected
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Verified" => Some(Self::Verified),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    ///
    /// Pending requests may be verified or rejected; Verified and
    /// Rejected are terminal. Re-asserting the current status is
    /// always allowed.
    pub fn can_transition(self, next: Self) -> bool {
        self == next || matches!((self, next), (Self::Pending, Self::Verified | Self::Rejected))
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering over `submitted_date` for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn from_param(sort_by: Option<&str>) -> Option<Self> {
        match sort_by {
            Some("newest") => Some(Self::Newest),
            Some("oldest") => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Normalized list-query filter: "All" or blank means unfiltered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerificationFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub sort: Option<SortOrder>,
}

impl VerificationFilter {
    pub fn new(
        category: Option<String>,
        status: Option<String>,
        sort_by: Option<String>,
    ) -> Self {
        Self {
            category: normalize_facet(category),
            status: normalize_facet(status),
            sort: SortOrder::from_param(sort_by.as_deref()),
        }
    }
}

fn normalize_facet(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != FILTER_ALL)
}
