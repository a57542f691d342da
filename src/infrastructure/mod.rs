//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Debug log repositories (PostgreSQL and in-memory)
//! - [`storage`] - Object storage client (S3 over signed HTTP)
//! - [`probes`] - Health probes for credentials, storage and CDN

pub mod persistence;
pub mod probes;
pub mod storage;
