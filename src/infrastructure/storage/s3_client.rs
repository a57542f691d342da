//! S3 client issuing signed `HEAD` requests against the configured bucket.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::service::{ObjectStorage, StorageError, StorageResult};
use super::sigv4::{SigningCredentials, sign_empty_request};
use crate::config::StorageConfig;

/// Minimal S3 client: it only knows how to check that its bucket is reachable.
///
/// Requests are signed with SigV4 when credentials are configured and sent
/// unsigned otherwise (public buckets still answer `HEAD`).
pub struct S3Client {
    http: Client,
    config: StorageConfig,
    bucket_url: Url,
}

impl S3Client {
    /// Creates a client for the configured bucket.
    ///
    /// # Arguments
    ///
    /// - `config` - bucket, region, optional endpoint and credentials
    /// - `timeout` - bound applied to every request this client sends
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidEndpoint`] if the endpoint cannot be parsed,
    /// or [`StorageError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: StorageConfig, timeout: Duration) -> StorageResult<Self> {
        let bucket_url = bucket_url(&config)?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            bucket_url,
        })
    }

    /// URL that `HEAD` requests are sent to.
    pub fn bucket_url(&self) -> &Url {
        &self.bucket_url
    }
}

/// Builds the bucket URL.
///
/// - AWS: virtual-hosted style, `https://{bucket}.s3.{region}.amazonaws.com/`
/// - custom endpoint: path style, `{endpoint}/{bucket}`
pub(crate) fn bucket_url(config: &StorageConfig) -> StorageResult<Url> {
    let raw = match config.endpoint {
        Some(ref endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket),
        None => format!(
            "https://{}.s3.{}.amazonaws.com/",
            config.bucket, config.region
        ),
    };

    Url::parse(&raw).map_err(|e| StorageError::InvalidEndpoint(format!("{raw}: {e}")))
}

/// Value of the `Host` header reqwest will send for this URL.
fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

#[async_trait]
impl ObjectStorage for S3Client {
    async fn head_bucket(&self) -> StorageResult<()> {
        let mut request = self.http.head(self.bucket_url.clone());

        if self.config.has_credentials() {
            let credentials = SigningCredentials {
                access_key_id: self.config.access_key_id.trim(),
                secret_access_key: self.config.secret_access_key.trim(),
                session_token: self.config.session_token.as_deref(),
            };
            let signed = sign_empty_request(
                "HEAD",
                &host_header(&self.bucket_url),
                self.bucket_url.path(),
                &self.config.region,
                &credentials,
                Utc::now(),
            );

            request = request
                .header("x-amz-date", signed.amz_date)
                .header("x-amz-content-sha256", signed.content_sha256)
                .header(AUTHORIZATION, signed.authorization);
            if let Some(token) = signed.security_token {
                request = request.header("x-amz-security-token", token);
            }
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StorageError::Timeout
            } else {
                StorageError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        debug!("HEAD {} -> {}", self.bucket_url, status);

        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(StorageError::BucketNotFound(self.config.bucket.clone())),
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                Err(StorageError::AccessDenied(self.config.bucket.clone()))
            }
            other => Err(StorageError::UnexpectedStatus(other.as_u16())),
        }
    }
}
