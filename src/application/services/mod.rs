//! Business logic services for the application layer.

pub mod deadline;
pub mod error_reporter;
pub mod redirect_service;
pub mod request_info;
pub mod shorten_service;

pub use error_reporter::ErrorReporter;
pub use redirect_service::RedirectService;
pub use request_info::RequestInfo;
pub use shorten_service::{ShortenService, ShortenSettings, ShortenedUrl};
