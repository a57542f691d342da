//! Direct and CDN URL construction for stored media objects.

use crate::config::StorageConfig;
use crate::error::AppError;
use crate::utils::key_encoder::{encode_key, normalize_key};
use serde_json::json;

/// Public URLs for one object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    /// Object key after normalisation (no leading `/`, not encoded).
    pub key: String,
    pub direct_url: String,
    /// `None` when no CDN domain is configured.
    pub cdn_url: Option<String>,
}

/// Builds object URLs from the storage configuration.
///
/// Pure: no network calls are made.
pub struct MediaUrlService {
    storage: StorageConfig,
}

impl MediaUrlService {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    /// Builds the direct bucket URL and, when configured, the CDN URL for `key`.
    ///
    /// - AWS: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
    /// - custom endpoint: `{endpoint}/{bucket}/{key}`
    /// - CDN: `https://{cdn_domain}/{key}`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is empty after stripping
    /// leading slashes.
    pub fn build(&self, key: &str) -> Result<MediaUrls, AppError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(AppError::bad_request(
                "Object key is required",
                json!({ "field": "key" }),
            ));
        }

        let encoded = encode_key(key);

        let direct_url = match self.storage.endpoint.as_deref() {
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.storage.bucket,
                encoded
            ),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.storage.bucket, self.storage.region, encoded
            ),
        };

        let cdn_url = self
            .storage
            .cdn_host()
            .map(|host| format!("https://{host}/{encoded}"));

        Ok(MediaUrls {
            key: key.to_string(),
            direct_url,
            cdn_url,
        })
    }
}
