//! Pure view-derivation functions over the domain datasets.
//!
//! # Responsibility
//! - Derive filtered/partitioned views without touching any state.
//! - Keep selection semantics for bulk actions in one place.
//!
//! # Invariants
//! - Every function here is side-effect free and deterministic.

pub mod filter;
pub mod selection;
