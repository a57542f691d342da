//! API route configuration.

use crate::api::handlers::{
    create_debug_log_handler, get_debug_log_handler, list_debug_logs_handler,
    media_url_handler, resolve_debug_log_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /debug-logs`          - List entries (`?resolved=&limit=`)
/// - `POST /debug-logs`          - Record an entry
/// - `POST /debug-logs/resolve`  - Mark an entry resolved
/// - `GET  /debug-logs/{id}`     - Fetch one entry
/// - `GET  /media/url`           - Direct and CDN URLs for `?key=`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/debug-logs",
            get(list_debug_logs_handler).post(create_debug_log_handler),
        )
        .route("/debug-logs/resolve", post(resolve_debug_log_handler))
        .route("/debug-logs/{id}", get(get_debug_log_handler))
        .route("/media/url", get(media_url_handler))
}
