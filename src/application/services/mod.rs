//! Business logic services for the application layer.

pub mod cache_keys;
pub mod outcome;
pub mod rate_limiter;
pub mod resolve_service;
pub mod shorten_service;
pub mod stats_service;

pub use outcome::{Outcome, Source};
pub use rate_limiter::{Admission, RateLimiter};
pub use resolve_service::ResolveService;
pub use shorten_service::ShortenService;
pub use stats_service::StatsService;
