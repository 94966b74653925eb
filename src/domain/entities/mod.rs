//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored `short_id -> original_url` mapping
//! - [`ErrorLog`] - A persisted record of a request handling failure
//!
//! Creation inputs are separate structs ([`NewErrorLog`]) carrying only the
//! fields the caller supplies; ids and timestamps are assigned by the store.

pub mod error_log;
pub mod url_record;

pub use error_log::{ErrorLog, NewErrorLog};
pub use url_record::UrlRecord;
