//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; orchestration lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A persisted long URL / short code pair
//! - [`NewUrlMapping`] - Input for creating a mapping
//! - [`UrlStats`] - Access metadata exposed by the stats endpoint

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping, UrlStats};
