//! Debug log repository implementations.
//!
//! # Repositories
//!
//! - [`PgDebugLogRepository`] - PostgreSQL storage (production default)
//! - [`InMemoryDebugLogRepository`] - process-local storage for development and tests

pub mod in_memory_debug_log_repository;
pub mod pg_debug_log_repository;

pub use in_memory_debug_log_repository::InMemoryDebugLogRepository;
pub use pg_debug_log_repository::PgDebugLogRepository;
