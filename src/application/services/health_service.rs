//! Health aggregation across all dependency probes.

use chrono::Utc;
use futures::FutureExt;
use futures::future::join_all;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::health::{HealthReport, Probe, ServiceCheckResult, ServiceStatus};

/// Runs every configured probe and reduces the outcomes to a [`HealthReport`].
///
/// Probes run concurrently and are joined before the report is built, so
/// probe order never affects the result. Each probe is bounded by
/// `probe_timeout`; a probe that exceeds it, or panics, is reported as
/// [`ServiceStatus::Error`] and the remaining probes are unaffected.
pub struct HealthAggregator {
    probes: Vec<Arc<dyn Probe>>,
    probe_timeout: Duration,
}

impl HealthAggregator {
    /// Creates an aggregator over a fixed probe set.
    pub fn new(probes: Vec<Arc<dyn Probe>>, probe_timeout: Duration) -> Self {
        Self {
            probes,
            probe_timeout,
        }
    }

    /// Names of the configured probes, in registration order.
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Runs all probes and builds the report.
    ///
    /// Never fails: every probe-level failure is already folded into the
    /// report as an `error` entry.
    pub async fn perform_full_health_check(&self) -> HealthReport {
        let timestamp = Utc::now();
        info!(probes = self.probes.len(), "Starting full health check");

        let results = join_all(
            self.probes
                .iter()
                .map(|probe| run_probe(probe.clone(), self.probe_timeout)),
        )
        .await;

        let report = HealthReport::new(timestamp, results);

        for result in report.services().values() {
            metrics::counter!(
                "health_probe_results_total",
                "service" => result.service.clone(),
                "status" => result.status.as_str()
            )
            .increment(1);
        }

        match report.overall() {
            ServiceStatus::Ok => info!("Health check completed: ok"),
            status => warn!(
                overall = %status,
                failing = ?failing_services(&report),
                "Health check completed with problems"
            ),
        }

        report
    }
}

/// Runs one probe under the timeout, converting panics and timeouts into
/// `error` results keyed by the probe's name.
async fn run_probe(probe: Arc<dyn Probe>, limit: Duration) -> ServiceCheckResult {
    let name = probe.name();
    let guarded = AssertUnwindSafe(probe.check()).catch_unwind();

    match tokio::time::timeout(limit, guarded).await {
        Ok(Ok(result)) => ServiceCheckResult {
            service: name.to_string(),
            ..result
        },
        Ok(Err(panic)) => {
            warn!(probe = name, "Probe panicked");
            ServiceCheckResult::error(name, format!("probe panicked: {}", panic_message(&*panic)))
        }
        Err(_) => {
            warn!(probe = name, timeout_ms = limit.as_millis() as u64, "Probe timed out");
            ServiceCheckResult::error(name, format!("timeout after {}ms", limit.as_millis()))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        return s;
    }
    match payload.downcast_ref::<String>() {
        Some(s) => s.as_str(),
        None => "unknown panic",
    }
}

fn failing_services(report: &HealthReport) -> Vec<&str> {
    report
        .services()
        .values()
        .filter(|r| r.status != ServiceStatus::Ok)
        .map(|r| r.service.as_str())
        .collect()
}
