//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and retrieval
//! - [`PgErrorLogRepository`] - Error-log appends (plus read-only queries for the admin CLI)

pub mod pg_error_log_repository;
pub mod pg_url_repository;

pub use pg_error_log_repository::PgErrorLogRepository;
pub use pg_url_repository::PgUrlRepository;
