//! HTTP server initialization and runtime setup.
//!
//! Handles the debug log store, the storage client and probe wiring, and the
//! Axum server lifecycle.

use crate::application::services::HealthAggregator;
use crate::config::{Config, DebugLogStore};
use crate::domain::repositories::DebugLogRepository;
use crate::infrastructure::persistence::{InMemoryDebugLogRepository, PgDebugLogRepository};
use crate::infrastructure::probes::default_probes;
use crate::infrastructure::storage::S3Client;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Debug log store (PostgreSQL with migrations, or in-memory)
/// - S3 client and health probes
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The storage endpoint is invalid
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let aggregator = build_health_aggregator(&config)?;
    tracing::info!(probes = ?aggregator.probe_names(), "Health probes registered");

    let state = AppState::new(
        repository,
        aggregator,
        config.storage.clone(),
        config.environment.clone(),
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the configured debug log store.
///
/// For PostgreSQL, opens the pool and applies pending migrations.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn DebugLogRepository>> {
    match (config.debug_log_store, config.database_url.as_deref()) {
        (DebugLogStore::Postgres, Some(url)) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgDebugLogRepository::new(Arc::new(pool))))
        }
        (DebugLogStore::Postgres, None) => {
            anyhow::bail!("DEBUG_LOG_STORE=postgres requires a database URL")
        }
        (DebugLogStore::Memory, _) => {
            tracing::warn!("Using in-memory debug log store; entries are lost on restart");
            Ok(Arc::new(InMemoryDebugLogRepository::new()))
        }
    }
}

/// Headroom between the S3 request deadline and the per-probe deadline.
const STORAGE_TIMEOUT_MARGIN: Duration = Duration::from_millis(50);

/// Builds the aggregator over the standard probe set.
///
/// The S3 client's request timeout sits just under the per-probe bound, so a
/// slow bucket is reported by the client as `timeout`.
pub fn build_health_aggregator(config: &Config) -> Result<HealthAggregator> {
    let timeout = config.probe_timeout();
    let client = S3Client::new(config.storage.clone(), storage_request_timeout(timeout))
        .context("Failed to build storage client")?;
    tracing::debug!(url = %client.bucket_url(), "Storage client ready");

    let probes = default_probes(&config.storage, Arc::new(client));
    Ok(HealthAggregator::new(probes, timeout))
}

fn storage_request_timeout(probe_timeout: Duration) -> Duration {
    probe_timeout.saturating_sub(STORAGE_TIMEOUT_MARGIN)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_request_timeout_is_below_probe_timeout() {
        assert_eq!(
            storage_request_timeout(Duration::from_millis(5_000)),
            Duration::from_millis(4_950)
        );
        assert_eq!(
            storage_request_timeout(Duration::from_millis(100)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_storage_request_timeout_saturates() {
        assert_eq!(storage_request_timeout(Duration::from_millis(20)), Duration::ZERO);
    }
}
