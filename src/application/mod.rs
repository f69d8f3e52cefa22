//! Application layer services implementing business logic.
//!
//! This layer orchestrates the cache and the store. Services consume the
//! repository and cache traits and provide a clean API for HTTP handlers
//! and middleware.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short URL creation
//! - [`services::resolve_service::ResolveService`] - Short URL resolution and access counting
//! - [`services::stats_service::StatsService`] - Access statistics
//! - [`services::rate_limiter::RateLimiter`] - Per-client request admission

pub mod services;
