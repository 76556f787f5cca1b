//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture: traits
//! that adapters implement to integrate external collaborators.
//!
//! # Architecture
//!
//! ```text
//!                 ┌───────────────────────────┐
//!                 │     Specialized services  │
//!                 │                           │
//!     ┌───────────┤     Domain + Port         ├───────────┐
//!     │           │                           │           │
//!     │           └───────────────────────────┘           │
//!     ▼                                                   ▼
//! ┌───────────┐                                     ┌───────────┐
//! │  Store    │                                     │ Validate  │
//! │  Adapter  │                                     │ (rule set)│
//! └───────────┘                                     └───────────┘
//! ```
//!
//! # Available ports
//!
//! - [`Store`] - generic key-addressable persistence for one entity type,
//!   plus one finder trait per entity ([`StudentStore`], [`AttendanceStore`],
//!   and the rest) named after the query shape.
//! - [`Validate`] - pure pass/fail check of an entity's field values,
//!   returning every violation. No I/O.

mod store;
mod validate;

pub use store::{
    AttendanceStore, ClassScheduleStore, ClassStore, ClassSubjectStore, ClassTeacherStore,
    ExamResultStore, ExamStore, GradeLevelStore, ParentStore, SessionStore, Store,
    StudentGeneralRateStore, StudentStore, StudentTrimesterRateStore, SubjectStore, TeacherStore,
    TeacherScheduleStore, UserStore,
};

pub use validate::{Validate, ValidationReport, Violation};
