//! Application services.
//!
//! - [`HealthAggregator`] - runs dependency probes and reduces them to one report
//! - [`DebugLogService`] - records and resolves debug log entries
//! - [`MediaUrlService`] - builds direct and CDN URLs for object keys

pub mod debug_log_service;
pub mod health_service;
pub mod media_url_service;

pub use debug_log_service::DebugLogService;
pub use health_service::HealthAggregator;
pub use media_url_service::{MediaUrlService, MediaUrls};
