//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`health`] - Service status, probe results and the health report
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and probe traits define contracts implemented by the
//! infrastructure layer.

pub mod entities;
pub mod health;
pub mod repositories;
