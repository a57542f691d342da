//! Object storage trait and error types.

use async_trait::async_trait;

/// Errors that can occur while talking to the object store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("bucket '{0}' not found")]
    BucketNotFound(String),

    #[error("access denied to bucket '{0}'")]
    AccessDenied(String),

    #[error("unexpected response from storage: HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("invalid storage endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("timeout")]
    Timeout,

    #[error("storage request failed: {0}")]
    Transport(String),
}

/// Result type for object storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Read-only operations against the configured bucket.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::S3Client`] - signed HTTP requests to S3
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Confirms the bucket exists and is reachable with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] describing why the bucket could not be reached.
    async fn head_bucket(&self) -> StorageResult<()>;
}
