//! Use-case services over the domain collections.
//!
//! # Responsibility
//! - Orchestrate pure mutation functions, session state and the notifier.
//! - Keep consumers decoupled from collection bookkeeping.
//!
//! # Invariants
//! - Every state transition is also exposed as a pure
//!   `(collection, params) -> new collection` function, so a server-backed
//!   implementation can sit behind the same contract.

pub mod admin;
pub mod feed;
pub mod jobs;
