//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public JSON contract (`originalUrl`, `shortUrl`).

pub mod shorten;
pub mod status;
