//! Object storage reachability probe.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::health::{Probe, ServiceCheckResult};
use crate::infrastructure::storage::ObjectStorage;

/// Reports `ok` when the bucket answers a `HEAD` request and `error` with the
/// underlying failure message otherwise.
pub struct ObjectStorageProbe {
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
}

impl ObjectStorageProbe {
    pub const NAME: &'static str = "storage";

    pub fn new(storage: Arc<dyn ObjectStorage>, bucket: String) -> Self {
        Self { storage, bucket }
    }
}

#[async_trait]
impl Probe for ObjectStorageProbe {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn check(&self) -> ServiceCheckResult {
        match self.storage.head_bucket().await {
            Ok(()) => ServiceCheckResult::ok(Self::NAME, format!("bucket '{}' reachable", self.bucket)),
            Err(e) => {
                warn!("Storage probe failed for bucket {}: {}", self.bucket, e);
                ServiceCheckResult::error(Self::NAME, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::health::ServiceStatus;
    use crate::infrastructure::storage::{MockObjectStorage, StorageError};

    #[tokio::test]
    async fn test_reachable_bucket_is_ok() {
        let mut storage = MockObjectStorage::new();
        storage.expect_head_bucket().times(1).returning(|| Ok(()));

        let probe = ObjectStorageProbe::new(Arc::new(storage), "media".to_string());
        let result = probe.check().await;

        assert_eq!(result.status, ServiceStatus::Ok);
        assert_eq!(result.service, "storage");
    }

    #[tokio::test]
    async fn test_failure_carries_underlying_message() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_head_bucket()
            .times(1)
            .returning(|| Err(StorageError::BucketNotFound("media".to_string())));

        let probe = ObjectStorageProbe::new(Arc::new(storage), "media".to_string());
        let result = probe.check().await;

        assert_eq!(result.status, ServiceStatus::Error);
        assert_eq!(result.detail.as_deref(), Some("bucket 'media' not found"));
    }

    #[tokio::test]
    async fn test_timeout_detail() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_head_bucket()
            .times(1)
            .returning(|| Err(StorageError::Timeout));

        let probe = ObjectStorageProbe::new(Arc::new(storage), "media".to_string());
        let result = probe.check().await;

        assert_eq!(result.status, ServiceStatus::Error);
        assert_eq!(result.detail.as_deref(), Some("timeout"));
    }
}
