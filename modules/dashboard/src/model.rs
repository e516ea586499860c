//! Dashboard response models

use serde::Serialize;
use utoipa::ToSchema;

/// Monthly summary metric (e.g. total POA requests)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardMetric {
    pub current_month: i64,

    /// e.g. "+5.2% vs last month"
    #[schema(example = "+5.2% vs last month")]
    pub comparison_percent: String,
}

/// Monthly request count used for plotting
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyActivity {
    #[schema(example = "Jan")]
    pub month: String,

    pub count: i64,
}

/// Dashboard endpoint response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardData {
    pub total_poa_requests: DashboardMetric,
    pub pending_approvals: DashboardMetric,
    pub verified_agents: DashboardMetric,
    pub rejected_kyc_issues: DashboardMetric,
    pub monthly_activity: Vec<MonthlyActivity>,
    pub annual_total: i64,

    /// e.g. "+15.8% Last 6 Months"
    #[schema(example = "+15.8% Last 6 Months")]
    pub last_6_month_increase: String,
}

/// Suggested admin action
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuickAction {
    #[schema(example = "review_urgent")]
    pub id: String,

    pub label: String,

    pub description: String,
}

/// Quick actions endpoint response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuickActionsResponse {
    pub actions: Vec<QuickAction>,
}
