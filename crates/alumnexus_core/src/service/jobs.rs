//! Jobs-board use-cases: apply and save/unsave.
//!
//! # Responsibility
//! - Track the session's applied and saved job-id sets.
//! - Emit the toast payloads the portal shows for job actions.
//!
//! # Invariants
//! - Applying is idempotent: reapplying to an applied job is a no-op.
//! - Saving is a symmetric toggle.
//! - `applications_count` on the posting is static display data and never
//!   changes here.

use log::info;

use crate::model::job::Job;
use crate::model::user::EntityId;
use crate::notify::{Notifier, Toast};
use crate::query::selection::toggle_membership;

/// Returns the applied set with the job id added; already-applied is a
/// no-op.
pub fn apply_to_job(applied: &[EntityId], job_id: &str) -> Vec<EntityId> {
    if applied.iter().any(|id| id == job_id) {
        return applied.to_vec();
    }
    let mut next = applied.to_vec();
    next.push(job_id.to_string());
    next
}

/// Returns the saved set with the job id toggled.
pub fn toggle_saved_job(saved: &[EntityId], job_id: &str) -> Vec<EntityId> {
    toggle_membership(saved, job_id)
}

/// Jobs-board service owning the postings and per-session action sets.
pub struct JobService<N: Notifier> {
    jobs: Vec<Job>,
    applied: Vec<EntityId>,
    saved: Vec<EntityId>,
    notifier: N,
}

impl<N: Notifier> JobService<N> {
    /// Creates a service over the job postings with empty action sets.
    pub fn new(jobs: Vec<Job>, notifier: N) -> Self {
        Self {
            jobs,
            applied: Vec::new(),
            saved: Vec::new(),
            notifier,
        }
    }

    /// All postings, active and closed.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns whether the session already applied to the job.
    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applied.iter().any(|id| id == job_id)
    }

    /// Returns whether the job is in the saved set.
    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.iter().any(|id| id == job_id)
    }

    /// Job ids the session applied to, in application order.
    pub fn applied(&self) -> &[EntityId] {
        &self.applied
    }

    /// Saved job ids, in save order.
    pub fn saved(&self) -> &[EntityId] {
        &self.saved
    }

    /// Submits an application. Reapplying is a no-op without a toast,
    /// matching the disabled button in the portal.
    pub fn apply(&mut self, job_id: &str) {
        if self.has_applied(job_id) {
            return;
        }
        self.applied = apply_to_job(&self.applied, job_id);
        info!("event=job_applied module=jobs status=ok job_id={job_id}");
        self.notifier.notify(Toast::with_description(
            "Application Submitted!",
            "Your application has been sent successfully.",
        ));
    }

    /// Toggles the job in the saved set and announces the direction.
    pub fn toggle_saved(&mut self, job_id: &str) {
        let was_saved = self.is_saved(job_id);
        self.saved = toggle_saved_job(&self.saved, job_id);
        if was_saved {
            self.notifier.notify(Toast::titled("Job removed from saved"));
        } else {
            self.notifier.notify(Toast::titled("Job saved successfully!"));
        }
    }

    /// Consumes the service, returning the notifier for inspection.
    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
