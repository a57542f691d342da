//! Dependency probes feeding the health aggregator.
//!
//! - [`CredentialsProbe`] - access key and secret are configured
//! - [`ObjectStorageProbe`] - the bucket answers a `HEAD` request
//! - [`CdnProbe`] - a CDN domain is configured
//!
//! Each probe reads only its own configuration and reports every problem as
//! a [`crate::domain::health::ServiceCheckResult`].

mod cdn;
mod credentials;
mod object_storage;

pub use cdn::CdnProbe;
pub use credentials::CredentialsProbe;
pub use object_storage::ObjectStorageProbe;

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::domain::health::Probe;
use crate::infrastructure::storage::ObjectStorage;

/// The standard probe set for a storage configuration.
pub fn default_probes(
    storage: &StorageConfig,
    object_storage: Arc<dyn ObjectStorage>,
) -> Vec<Arc<dyn Probe>> {
    vec![
        Arc::new(CredentialsProbe::new(storage)),
        Arc::new(ObjectStorageProbe::new(object_storage, storage.bucket.clone())),
        Arc::new(CdnProbe::new(storage)),
    ]
}
