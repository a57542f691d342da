//! DTOs for the media URL endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::MediaUrls;

#[derive(Debug, Deserialize)]
pub struct MediaUrlQuery {
    #[serde(default)]
    pub key: String,
}

/// Direct and CDN URLs for one object. `cdn_url` is `null` without a CDN.
#[derive(Debug, Serialize)]
pub struct MediaUrlResponse {
    pub success: bool,
    pub key: String,
    pub direct_url: String,
    pub cdn_url: Option<String>,
}

impl From<MediaUrls> for MediaUrlResponse {
    fn from(urls: MediaUrls) -> Self {
        Self {
            success: true,
            key: urls.key,
            direct_url: urls.direct_url,
            cdn_url: urls.cdn_url,
        }
    }
}
