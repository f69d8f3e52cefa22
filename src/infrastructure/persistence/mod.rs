//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - URL mapping storage, lookup and access counting

pub mod pg_url_mapping_repository;

pub use pg_url_mapping_repository::PgUrlMappingRepository;
