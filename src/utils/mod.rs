//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Debug log id generation and validation
//! - [`key_encoder`] - Object key normalisation and URL encoding

pub mod id_generator;
pub mod key_encoder;
