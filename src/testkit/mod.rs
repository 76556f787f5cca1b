//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - [`MemoryStore`], a vector-backed implementation of every
//!   store port, for exercising the service layer without a database.
//! - [`builders`] - Per-entity builders producing records that pass their
//!   rule sets; tests break one field at a time.

pub mod builders;
pub mod store;

pub use store::MemoryStore;
