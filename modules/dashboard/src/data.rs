//! Static data provider for the dashboard
//!
//! Deterministic sample values; the reporting pipeline that will feed
//! real numbers lives outside this service.

use crate::model::{
    DashboardData, DashboardMetric, MonthlyActivity, QuickAction, QuickActionsResponse,
};

/// Key metrics and activity data for the admin dashboard
pub fn dashboard_data() -> DashboardData {
    DashboardData {
        total_poa_requests: DashboardMetric {
            current_month: 240,
            comparison_percent: "+5.2% vs last month".to_string(),
        },
        pending_approvals: DashboardMetric {
            current_month: 12,
            comparison_percent: "+12.0% vs last month".to_string(),
        },
        verified_agents: DashboardMetric {
            current_month: 12,
            comparison_percent: "+1.5% vs last month".to_string(),
        },
        rejected_kyc_issues: DashboardMetric {
            current_month: 5,
            comparison_percent: "-3.1% vs last month".to_string(),
        },
        monthly_activity: monthly_activity(),
        annual_total: 1482,
        last_6_month_increase: "+15.8% Last 6 Months".to_string(),
    }
}

fn monthly_activity() -> Vec<MonthlyActivity> {
    let counts: [(&str, i64); 12] = [
        ("Jan", 25),
        ("Feb", 60),
        ("Mar", 10),
        ("Apr", 150),
        ("May", 2000),
        ("Jun", 500),
        ("Jul", 1800),
        ("Aug", 100),
        ("Sep", 50),
        ("Oct", 150),
        ("Nov", 100),
        ("Dec", 10),
    ];

    counts
        .into_iter()
        .map(|(month, count)| MonthlyActivity {
            month: month.to_string(),
            count,
        })
        .collect()
}

/// Static quick-action list for the admin landing page
pub fn quick_actions() -> QuickActionsResponse {
    QuickActionsResponse {
        actions: vec![
            QuickAction {
                id: "review_urgent".to_string(),
                label: "Review Urgent Approvals".to_string(),
                description: "Review items flagged as urgent".to_string(),
            },
            QuickAction {
                id: "assign_flagged".to_string(),
                label: "Assign Flagged Requests".to_string(),
                description: "Assign requests that need manual review".to_string(),
            },
            QuickAction {
                id: "view_suspicious".to_string(),
                label: "View Suspicious Accounts".to_string(),
                description: "Open the suspicious accounts queue".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_data_is_deterministic() {
        let first = dashboard_data();
        let second = dashboard_data();
        assert_eq!(first.total_poa_requests.current_month, 240);
        assert_eq!(
            first.total_poa_requests.current_month,
            second.total_poa_requests.current_month
        );
        assert_eq!(first.monthly_activity.len(), 12);
        assert_eq!(first.monthly_activity[0].month, "Jan");
        assert_eq!(first.annual_total, second.annual_total);
    }

    #[test]
    fn quick_actions_include_urgent_review() {
        let actions = quick_actions();
        assert!(actions.actions.iter().any(|a| a.id == "review_urgent"));
    }
}
