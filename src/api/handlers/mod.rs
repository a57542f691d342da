//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod debug_logs;
pub mod fallback;
pub mod health;
pub mod media;

pub use debug_logs::{
    create_debug_log_handler, get_debug_log_handler, list_debug_logs_handler,
    resolve_debug_log_handler,
};
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use media::media_url_handler;
