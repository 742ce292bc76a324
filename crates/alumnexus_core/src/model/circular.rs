//! Announcement/notice record with priority and audience targeting.

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// Display priority of a circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Publication lifecycle state of a circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircularStatus {
    Draft,
    Published,
}

/// Announcement pushed to a target audience.
///
/// `target_audience` is `"all"` or a batch/department key; the sentinel
/// matches the categorical-filter convention of the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circular {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub target_audience: String,
    pub expiry_date: Option<String>,
    pub attachment: Option<String>,
    pub view_count: u32,
    pub status: CircularStatus,
    pub created_at: String,
}

impl Circular {
    /// Moves a draft to published. Idempotent for already-published records.
    pub fn publish(&mut self) {
        self.status = CircularStatus::Published;
    }
}
