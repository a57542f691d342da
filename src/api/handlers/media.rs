//! Handler for media URL construction.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::media::{MediaUrlQuery, MediaUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Builds the direct bucket URL and CDN URL for an object key.
///
/// # Endpoint
///
/// `GET /api/media/url?key=videos/intro.mp4`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "key": "videos/intro.mp4",
///   "direct_url": "https://media-bucket.s3.us-east-1.amazonaws.com/videos/intro.mp4",
///   "cdn_url": "https://d111111abcdef8.cloudfront.net/videos/intro.mp4"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `key` is missing or empty.
pub async fn media_url_handler(
    State(state): State<AppState>,
    Query(query): Query<MediaUrlQuery>,
) -> Result<Json<MediaUrlResponse>, AppError> {
    let urls = state.media_url_service.build(&query.key)?;
    Ok(Json(urls.into()))
}
