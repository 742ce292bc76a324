//! Toggle-membership selection set for multi-select bulk actions.
//!
//! # Invariants
//! - Each id appears at most once; insertion order is preserved.
//! - "Select all" is itself a toggle against the current full-selection
//!   state: when every visible id is already selected it clears the whole
//!   selection, otherwise it replaces the selection with exactly the
//!   visible ids.

use crate::model::user::EntityId;

/// Ordered set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<EntityId>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the id is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Adds the id when absent, removes it when present.
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Select-all toggle over the currently visible ids.
    ///
    /// When all visible ids are already selected the selection becomes
    /// empty; otherwise it becomes exactly the visible ids. Previously
    /// selected but no-longer-visible ids are dropped in both cases.
    pub fn toggle_all(&mut self, visible: &[EntityId]) {
        let all_selected = visible.iter().all(|id| self.contains(id));
        if all_selected {
            self.ids.clear();
        } else {
            self.ids = visible.to_vec();
        }
    }

    /// Drops every selected id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Toggle membership on a plain id list (saved jobs, expanded comments).
///
/// Returns a new list; the input is untouched.
pub fn toggle_membership(ids: &[EntityId], id: &str) -> Vec<EntityId> {
    if ids.iter().any(|existing| existing == id) {
        ids.iter().filter(|existing| *existing != id).cloned().collect()
    } else {
        let mut next = ids.to_vec();
        next.push(id.to_string());
        next
    }
}
