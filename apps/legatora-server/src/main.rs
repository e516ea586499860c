//! Legatora Admin Portal backend server
//!
//! Wires the storage gateway, runs startup migrations, and mounts the
//! POA, verification and dashboard routers on one axum listener.

mod config;

use anyhow::Result;
use axum::{http::HeaderValue, routing::get, Json, Router};
use clap::Parser;
use config::AppConfig;
use legatora_db::DbHandle;
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "legatora-server", about = "Legatora Admin Portal backend")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override the database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    let db = DbHandle::connect(&config.database.url).await?;

    poa_service::infra::storage::migrations::Migrator::up(db.conn(), None).await?;
    verification_service::infra::storage::migrations::Migrator::up(db.conn(), None).await?;
    tracing::info!("database schema ready");

    let poa_repo = Arc::new(
        poa_service::infra::storage::repositories::SeaOrmPoaRequestRepository::new(db.conn_arc()),
    );
    let poa = Arc::new(poa_service::domain::Service::new(
        poa_repo,
        config.poa.clone(),
    ));

    let verification_repo = Arc::new(
        verification_service::infra::storage::repositories::SeaOrmVerificationRepository::new(
            db.conn_arc(),
        ),
    );
    let verifications = Arc::new(verification_service::domain::Service::new(
        verification_repo,
    ));

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(dashboard::routes::router())
        .merge(poa_service::api::rest::routes::router(poa))
        .merge(verification_service::api::rest::routes::router(
            verifications,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_allowed_origins)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Legatora Admin API."
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let mut layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if !origins.is_empty() {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        layer = layer.allow_origin(origins);
    }

    Ok(layer)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "failed to install shutdown handler");
    }
}
