//! # Media Gateway
//!
//! Backend for a media service fronted by S3-compatible storage and a CDN,
//! built with Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Health model, debug log entity and repository traits
//! - **Application Layer** ([`application`]) - Health aggregation, debug log triage, media URLs
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, S3 client, dependency probes
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - `GET /health` reports credentials, bucket reachability and CDN configuration
//!   as `ok`, `degraded` or `error`
//! - Debug log entries can be recorded, listed and resolved
//! - Direct and CDN URLs for stored objects
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export S3_BUCKET_NAME="media-bucket"
//! export DEBUG_LOG_STORE="memory"   # or DATABASE_URL=postgres://...
//!
//! cargo run
//! curl localhost:3000/health
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DebugLogService, HealthAggregator, MediaUrlService};
    pub use crate::domain::entities::DebugLog;
    pub use crate::domain::health::{HealthReport, Probe, ServiceCheckResult, ServiceStatus};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
