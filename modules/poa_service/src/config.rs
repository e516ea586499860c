//! Configuration for the POA request service

use serde::Deserialize;

/// POA service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Marker value stored in `assigned_agent` until an agent is assigned
    #[serde(default = "default_assigned_agent")]
    pub default_assigned_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_assigned_agent: default_assigned_agent(),
        }
    }
}

fn default_assigned_agent() -> String {
    "Unassigned".to_string()
}
