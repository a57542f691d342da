//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`DebugLog`] - A client-reported debug log entry awaiting triage
//!
//! Creation input lives in a separate struct ([`NewDebugLog`]), following the
//! same split between stored records and insert payloads used across the crate.

pub mod debug_log;

pub use debug_log::{DebugLog, DebugLogFilter, LOG_LEVELS, NewDebugLog, ResolveOutcome};
