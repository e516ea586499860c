//! Storage gateway
//!
//! One connection routine with a single source of truth for the storage
//! location. Modules receive the shared connection through [`DbHandle`]
//! and never open their own.

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

/// Shared handle to the backing relational store.
#[derive(Clone)]
pub struct DbHandle {
    conn: Arc<DatabaseConnection>,
}

impl DbHandle {
    /// Open a pooled connection to `url` (SQLite or Postgres DSN).
    pub async fn connect(url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("failed to connect to database at {url}"))?;

        tracing::info!(%url, "database connection established");

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Borrow the underlying connection.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Clone the shared connection for a repository.
    pub fn conn_arc(&self) -> Arc<DatabaseConnection> {
        self.conn.clone()
    }
}
