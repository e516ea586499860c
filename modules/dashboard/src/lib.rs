//! Dashboard Module
//!
//! Read-only summary metrics for the admin dashboard. The numbers come
//! from a static provider; there is no storage access here.

pub mod data;
pub mod model;
pub mod routes;

pub use model::{DashboardData, DashboardMetric, MonthlyActivity, QuickAction, QuickActionsResponse};
