//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`db_error`] - SQLx error classification
//! - [`location`] - `Location` header encoding

pub mod db_error;
pub mod id_generator;
pub mod location;
