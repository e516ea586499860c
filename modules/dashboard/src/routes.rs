//! Route registration and handlers
//!
//! Handlers are inline; there is no domain service behind a static
//! provider.

use crate::data;
use crate::model::{DashboardData, QuickActionsResponse};
use axum::{routing::get, Json, Router};

/// Build the dashboard router
pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard_summary))
        .route("/dashboard/quick-actions", get(get_quick_actions))
}

/// Key metrics and activity data for the admin dashboard
async fn get_dashboard_summary() -> Json<DashboardData> {
    Json(data::dashboard_data())
}

/// Suggested actions for the admin landing page
async fn get_quick_actions() -> Json<QuickActionsResponse> {
    Json(data::quick_actions())
}
