//! Per-user notification record.
//!
//! The `read` flag is the only mutable lifecycle field; it is flipped
//! independently of every other entity.

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// Source category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Job,
    Application,
    Post,
    Message,
    Event,
    Mentorship,
}

/// Notification addressed to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    pub user_id: EntityId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub link: Option<String>,
    pub created_at: String,
}

/// Returns a copy of the collection with the given notification marked read.
///
/// A missing id is a no-op.
pub fn mark_read(notifications: &[Notification], id: &str) -> Vec<Notification> {
    notifications
        .iter()
        .map(|item| {
            let mut next = item.clone();
            if next.id == id {
                next.read = true;
            }
            next
        })
        .collect()
}

/// Returns a copy of the collection with every notification marked read.
pub fn mark_all_read(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|item| {
            let mut next = item.clone();
            next.read = true;
            next
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{mark_all_read, mark_read, Notification, NotificationKind};

    fn items() -> Vec<Notification> {
        vec![
            Notification {
                id: "1".to_string(),
                user_id: "1".to_string(),
                kind: NotificationKind::Job,
                title: "New Job Posted".to_string(),
                message: "A match".to_string(),
                read: false,
                link: None,
                created_at: "2024-03-10T10:00:00".to_string(),
            },
            Notification {
                id: "2".to_string(),
                user_id: "1".to_string(),
                kind: NotificationKind::Post,
                title: "Post Liked".to_string(),
                message: "A like".to_string(),
                read: false,
                link: None,
                created_at: "2024-03-10T09:30:00".to_string(),
            },
        ]
    }

    #[test]
    fn mark_read_only_touches_target() {
        let next = mark_read(&items(), "1");
        assert!(next[0].read);
        assert!(!next[1].read);
    }

    #[test]
    fn mark_read_missing_id_is_noop() {
        let before = items();
        assert_eq!(mark_read(&before, "99"), before);
    }

    #[test]
    fn mark_all_read_covers_collection() {
        assert!(mark_all_read(&items()).iter().all(|n| n.read));
    }
}
