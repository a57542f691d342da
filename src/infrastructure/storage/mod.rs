//! Object storage access used by the storage reachability probe.
//!
//! Provides an [`ObjectStorage`] trait with one production implementation,
//! [`S3Client`], which talks to S3 (or an S3-compatible endpoint) over plain
//! HTTPS with AWS Signature Version 4.

mod s3_client;
mod service;
mod sigv4;

pub use s3_client::S3Client;
pub use service::{ObjectStorage, StorageError, StorageResult};

#[cfg(test)]
pub use service::MockObjectStorage;
