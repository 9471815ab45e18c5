//! Healthbase Core - Domain entities, services, and deletion management.
//!
//! This crate contains the metadata core for Healthbase. It is
//! storage-agnostic: repositories are traits, and the in-memory
//! implementations shipped here are suitable for tests and embedders that
//! bring no storage of their own.

pub mod deletion;
pub mod errors;
pub mod indicators;
pub mod org_units;
pub mod relationships;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
