//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for input validation. Every handler response
//! is wrapped in an [`envelope::Envelope`].

pub mod envelope;
pub mod health;
pub mod shorten;
pub mod stats;
