//! Probe contract.

use async_trait::async_trait;

use super::ServiceCheckResult;

/// A single independent check of one dependency.
///
/// Implementations never fail: every problem they detect is reported as a
/// [`ServiceCheckResult`] with an appropriate status and detail. Probes hold
/// only read-only configuration, so any number of them may run concurrently.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Key under which this probe's result appears in the report.
    fn name(&self) -> &'static str;

    /// Runs the check.
    async fn check(&self) -> ServiceCheckResult;
}
