//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the record store. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Create and look up URL records
//! - [`ErrorLogRepository`] - Append-only error-log sink
//!
//! Both report failures as [`StorageError`].

pub mod error_log_repository;
pub mod storage_error;
pub mod url_repository;

pub use error_log_repository::ErrorLogRepository;
pub use storage_error::StorageError;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use error_log_repository::MockErrorLogRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
