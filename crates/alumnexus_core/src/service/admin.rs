//! Admin verification use-cases: approve, reject, bulk approve.
//!
//! # Responsibility
//! - Apply verification transitions to the alumni collection.
//! - Hold the multi-select state used by bulk actions.
//!
//! # Invariants
//! - `pending` is the only state with outgoing transitions; approve/reject
//!   on verified or rejected records is an idempotent no-op.
//! - `is_verified` always tracks `status == Verified` through transitions.
//! - Bulk approve clears the selection set afterwards, even for ids that
//!   were no-ops.

use log::info;

use crate::model::alumni::Alumni;
use crate::model::user::EntityId;
use crate::notify::{Notifier, Toast};
use crate::query::selection::SelectionSet;

/// Returns the collection with one profile approved (pending only).
pub fn approve_alumni(alumni: &[Alumni], id: &str) -> Vec<Alumni> {
    alumni
        .iter()
        .map(|record| {
            let mut next = record.clone();
            if next.id == id {
                next.approve();
            }
            next
        })
        .collect()
}

/// Returns the collection with one profile rejected (pending only).
pub fn reject_alumni(alumni: &[Alumni], id: &str) -> Vec<Alumni> {
    alumni
        .iter()
        .map(|record| {
            let mut next = record.clone();
            if next.id == id {
                next.reject();
            }
            next
        })
        .collect()
}

/// Returns the collection with every listed profile approved.
pub fn bulk_approve(alumni: &[Alumni], ids: &[EntityId]) -> Vec<Alumni> {
    alumni
        .iter()
        .map(|record| {
            let mut next = record.clone();
            if ids.iter().any(|id| *id == next.id) {
                next.approve();
            }
            next
        })
        .collect()
}

/// Verification service owning the alumni directory and selection state.
pub struct AdminService<N: Notifier> {
    alumni: Vec<Alumni>,
    selection: SelectionSet,
    notifier: N,
}

impl<N: Notifier> AdminService<N> {
    /// Creates a service over the alumni directory.
    pub fn new(alumni: Vec<Alumni>, notifier: N) -> Self {
        Self {
            alumni,
            selection: SelectionSet::new(),
            notifier,
        }
    }

    /// Full alumni directory.
    pub fn alumni(&self) -> &[Alumni] {
        &self.alumni
    }

    /// Current multi-select state.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Mutable multi-select state for row/header checkbox handling.
    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Approves one profile and announces it.
    pub fn approve(&mut self, id: &str) {
        self.alumni = approve_alumni(&self.alumni, id);
        info!("event=alumni_approved module=admin status=ok alumni_id={id}");
        self.notifier.notify(Toast::with_description(
            "Alumni Approved",
            "The alumni profile has been verified successfully.",
        ));
    }

    /// Rejects one profile and announces it destructively.
    pub fn reject(&mut self, id: &str) {
        self.alumni = reject_alumni(&self.alumni, id);
        info!("event=alumni_rejected module=admin status=ok alumni_id={id}");
        self.notifier.notify(
            Toast::with_description(
                "Alumni Rejected",
                "The alumni profile has been rejected.",
            )
            .destructive(),
        );
    }

    /// Approves every selected profile, then clears the selection.
    pub fn bulk_approve(&mut self) {
        let count = self.selection.len();
        self.alumni = bulk_approve(&self.alumni, self.selection.ids());
        info!("event=alumni_bulk_approved module=admin status=ok count={count}");
        self.notifier.notify(Toast::with_description(
            "Bulk Approval",
            format!("{count} alumni profiles have been approved."),
        ));
        self.selection.clear();
    }

    /// Consumes the service, returning the notifier for inspection.
    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
