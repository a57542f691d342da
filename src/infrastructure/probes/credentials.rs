//! Credential presence probe.

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::domain::health::{Probe, ServiceCheckResult};

/// Reports `error` unless both the access key and the secret are non-empty.
pub struct CredentialsProbe {
    present: bool,
}

impl CredentialsProbe {
    pub const NAME: &'static str = "credentials";

    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            present: storage.has_credentials(),
        }
    }
}

#[async_trait]
impl Probe for CredentialsProbe {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn check(&self) -> ServiceCheckResult {
        if self.present {
            ServiceCheckResult::ok(Self::NAME, "credentials configured")
        } else {
            ServiceCheckResult::error(Self::NAME, "missing credentials")
        }
    }
}
