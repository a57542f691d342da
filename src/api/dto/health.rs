//! DTOs for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::health::{HealthReport, ServiceStatus};

/// Health report plus the deployment facts clients use to interpret it.
///
/// Serializes flat:
/// `{timestamp, status, services, environment, region, bucket, has_credentials}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    #[serde(flatten)]
    pub report: HealthReport,
    pub environment: String,
    pub region: String,
    pub bucket: String,
    pub has_credentials: bool,
}

/// Body returned when the health check itself could not run.
#[derive(Debug, Serialize)]
pub struct HealthFailure {
    pub timestamp: DateTime<Utc>,
    pub status: ServiceStatus,
    pub error: String,
}
