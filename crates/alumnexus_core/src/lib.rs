//! Core domain logic for the ALUMNEXUS portal.
//! This crate is the single source of truth for session, query and
//! mutation semantics; presentation layers consume it without owning any
//! business rules.

pub mod data;
pub mod logging;
pub mod model;
pub mod notify;
pub mod policy;
pub mod query;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::alumni::{Alumni, AlumniValidationError, Experience, VerificationStatus};
pub use model::circular::{Circular, CircularStatus, Priority};
pub use model::event::{Event, EventCategory};
pub use model::job::{Job, JobStatus, JobType};
pub use model::message::Message;
pub use model::notification::{Notification, NotificationKind};
pub use model::post::{Comment, Post, Visibility};
pub use model::user::{EntityId, User, UserPatch, UserRole};
pub use notify::{LogNotifier, Notifier, RecordingNotifier, Toast, ToastVariant};
pub use policy::{authorize, landing_route, RouteDecision, RoutePolicy, ROUTE_POLICIES};
pub use query::filter::{
    field_filter, matches_query, partition_by_status, search, TextSearchable,
    VerificationPartition, ALL,
};
pub use query::selection::{toggle_membership, SelectionSet};
pub use service::admin::AdminService;
pub use service::feed::FeedService;
pub use service::jobs::JobService;
pub use session::auth::{
    AuthError, AuthPhase, AuthResult, AuthService, NewRegistration, PendingLogin,
    PendingRegistration,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
