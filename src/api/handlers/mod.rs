//! HTTP request handlers for API endpoints.
//!
//! Each handler records the request time first, calls one service, and
//! wraps the outcome in an [`crate::api::dto::envelope::Envelope`].

pub mod health;
pub mod resolve;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
