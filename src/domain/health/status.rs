//! Severity levels reported by probes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single service, or of the service as a whole.
///
/// Variants are declared in ascending severity, so the derived [`Ord`]
/// gives `Ok < Degraded < Error` and the overall status of a report is
/// simply the maximum of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
    Error,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Ok => "ok",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Error => "error",
        }
    }

    /// Reduces a set of statuses to the most severe one.
    ///
    /// `Error` wins over `Degraded`, which wins over `Ok`. An empty input is `Ok`.
    pub fn worst<I>(statuses: I) -> ServiceStatus
    where
        I: IntoIterator<Item = ServiceStatus>,
    {
        statuses.into_iter().max().unwrap_or(ServiceStatus::Ok)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
