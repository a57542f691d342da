//! Health model shared by the aggregator, the probes and the HTTP layer.
//!
//! - [`ServiceStatus`] - three-level severity with a total order
//! - [`ServiceCheckResult`] - outcome of one probe
//! - [`HealthReport`] - immutable aggregate of all probe outcomes
//! - [`Probe`] - contract implemented by every dependency check

mod probe;
mod report;
mod status;

pub use probe::Probe;
pub use report::{HealthReport, ServiceCheckResult};
pub use status::ServiceStatus;
