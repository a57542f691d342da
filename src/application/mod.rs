//! Application layer services.
//!
//! Services coordinate repository and probe calls, validate input, and give
//! HTTP handlers and the admin CLI a single entry point per operation.
//!
//! # Available Services
//!
//! - [`services::health_service::HealthAggregator`] - Dependency health report
//! - [`services::debug_log_service::DebugLogService`] - Debug log triage
//! - [`services::media_url_service::MediaUrlService`] - Media URL construction

pub mod services;
