//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`client_ip`] - Client identity extraction for rate limiting
//! - [`db_error`] - Database error classification

pub mod client_ip;
pub mod code_generator;
pub mod db_error;
