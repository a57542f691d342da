//! Probe results and the aggregate health report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::ServiceStatus;

/// Outcome of a single probe.
///
/// The service name is the key under which the result appears in a
/// [`HealthReport`], so it is not repeated in the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCheckResult {
    #[serde(skip)]
    pub service: String,
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ServiceCheckResult {
    pub fn new(service: impl Into<String>, status: ServiceStatus, detail: Option<String>) -> Self {
        Self {
            service: service.into(),
            status,
            detail,
        }
    }

    pub fn ok(service: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(service, ServiceStatus::Ok, Some(detail.into()))
    }

    pub fn degraded(service: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(service, ServiceStatus::Degraded, Some(detail.into()))
    }

    pub fn error(service: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(service, ServiceStatus::Error, Some(detail.into()))
    }
}

/// Aggregated health of every probed dependency at one instant.
///
/// Fields are private: the overall status is computed in [`HealthReport::new`]
/// from the collected results and cannot be set any other way.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    timestamp: DateTime<Utc>,
    #[serde(rename = "status")]
    overall: ServiceStatus,
    services: BTreeMap<String, ServiceCheckResult>,
}

impl HealthReport {
    /// Builds a report from probe results.
    ///
    /// Results are keyed by service name; if two results share a name the
    /// later one replaces the earlier.
    pub fn new<I>(timestamp: DateTime<Utc>, results: I) -> Self
    where
        I: IntoIterator<Item = ServiceCheckResult>,
    {
        let services: BTreeMap<String, ServiceCheckResult> = results
            .into_iter()
            .map(|result| (result.service.clone(), result))
            .collect();

        let overall = ServiceStatus::worst(services.values().map(|r| r.status));

        Self {
            timestamp,
            overall,
            services,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn overall(&self) -> ServiceStatus {
        self.overall
    }

    pub fn services(&self) -> &BTreeMap<String, ServiceCheckResult> {
        &self.services
    }

    pub fn service(&self, name: &str) -> Option<&ServiceCheckResult> {
        self.services.get(name)
    }
}
