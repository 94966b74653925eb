//! Application layer services implementing the use cases.
//!
//! Services consume repository traits, apply the store deadline, turn store
//! failures into [`crate::error::AppError`], and hand failures to the error
//! reporter. HTTP handlers only translate requests and responses.
//!
//! # Available Services
//!
//! - [`services::ShortenService`] - Create a short URL
//! - [`services::RedirectService`] - Resolve a short identifier to its target
//! - [`services::ErrorReporter`] - Best-effort error-log writer

pub mod services;
