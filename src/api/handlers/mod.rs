//! HTTP request handlers for API endpoints.

pub mod redirect;
pub mod shorten;
pub mod status;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use status::status_handler;
