//! CDN configuration probe.

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::domain::health::{Probe, ServiceCheckResult};

/// Reports `ok` when a CDN domain is configured and `degraded` otherwise.
///
/// Never reports `error`: without a CDN, media is still served straight from
/// the bucket.
pub struct CdnProbe {
    domain: Option<String>,
}

impl CdnProbe {
    pub const NAME: &'static str = "cdn";

    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            domain: storage.cdn_host().map(str::to_string),
        }
    }
}

#[async_trait]
impl Probe for CdnProbe {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn check(&self) -> ServiceCheckResult {
        match self.domain {
            Some(ref domain) => ServiceCheckResult::ok(Self::NAME, format!("configured: {domain}")),
            None => ServiceCheckResult::degraded(
                Self::NAME,
                "CDN domain not configured, serving directly from storage",
            ),
        }
    }
}
