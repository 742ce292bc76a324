//! Session-scoped authentication state.
//!
//! # Responsibility
//! - Own the current-user state and its login/logout transitions.
//! - Keep credential storage behind the session boundary.
//!
//! # Invariants
//! - At most one user is current per session; nothing survives the process.
//! - Passwords never cross the module boundary.

pub mod auth;
