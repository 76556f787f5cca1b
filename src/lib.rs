//! Chalkboard - validated data access for school administration.
//!
//! This crate is the business-rule layer of a school administration system:
//! students, teachers, parents, classes, subjects, sessions, exams, grading
//! rates, attendance, and login accounts, each behind a service that gates
//! every mutation on a declarative rule set.
//!
//! # Architecture
//!
//! The crate is a hexagon around one generic pipeline:
//!
//! - **`domain`** - Plain entity records and the closed `Role` /
//!   `AttendanceStatus` sets.
//! - **`port`** - The [`port::Store`] contract, per-entity finder traits,
//!   and the [`port::Validate`] seam.
//! - **`validation`** - The [`validation::RuleSet`] engine plus one rule
//!   set per entity; a failing entity reports every violation at once.
//! - **`service`** - [`service::EntityService`] runs capability gate,
//!   validation, optional pre-persist transform, then storage. Specialized
//!   services add guarded finders per entity.
//! - **`registry`** - Fans one storage handle out into all seventeen
//!   services with per-entity mutation capabilities.
//!
//! # Features
//!
//! - `testkit` - Expose the in-memory store and entity builders to
//!   integration tests.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chalkboard::registry::{Capabilities, Registry};
//! use chalkboard::testkit::MemoryStore;
//!
//! # async fn demo() -> chalkboard::error::Result<()> {
//! let registry = Registry::with_capabilities(Arc::new(MemoryStore::new()), Capabilities::default());
//! let seventh_grade = registry.students.by_class_name("7B").await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod port;
pub mod registry;
pub mod service;
pub mod validation;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::{Error, Result};
