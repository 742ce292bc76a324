//! Domain model for the alumni-network portal.
//!
//! # Responsibility
//! - Define the canonical entity records consumed by query/mutation layers.
//! - Keep wire naming aligned with the external portal schema (camelCase).
//!
//! # Invariants
//! - Every record is identified by a sequential decimal-string id.
//! - Relationships are denormalized foreign keys; consumers must tolerate
//!   dangling references by degrading to a no-op or placeholder.
//! - "Mutation" always means producing a new record/collection.

pub mod alumni;
pub mod circular;
pub mod event;
pub mod job;
pub mod message;
pub mod notification;
pub mod post;
pub mod user;
