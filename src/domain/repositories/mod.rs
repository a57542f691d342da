//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod debug_log_repository;

pub use debug_log_repository::DebugLogRepository;

#[cfg(test)]
pub use debug_log_repository::MockDebugLogRepository;
