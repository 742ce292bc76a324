//! Alumni event record.

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// Event category used for listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Reunion,
    Workshop,
    Seminar,
    Sports,
    Networking,
}

/// Scheduled alumni event with RSVP tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub category: EventCategory,
    pub max_attendees: u32,
    pub current_attendees: u32,
    pub rsvp_deadline: String,
    pub banner: Option<String>,
    pub registered_users: Vec<EntityId>,
}

impl Event {
    /// Returns whether the user already has an RSVP on record.
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered_users.iter().any(|id| id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, EventCategory};

    fn reunion() -> Event {
        Event {
            id: "1".to_string(),
            title: "Batch of 2020 Reunion".to_string(),
            description: "Evening get-together for the 2020 batch.".to_string(),
            date: "2024-04-20".to_string(),
            time: "18:00".to_string(),
            venue: "Main Auditorium".to_string(),
            category: EventCategory::Reunion,
            max_attendees: 200,
            current_attendees: 2,
            rsvp_deadline: "2024-04-15".to_string(),
            banner: None,
            registered_users: vec!["2".to_string(), "3".to_string()],
        }
    }

    #[test]
    fn registered_user_has_an_rsvp_on_record() {
        assert!(reunion().is_registered("2"));
        assert!(reunion().is_registered("3"));
    }

    #[test]
    fn unregistered_user_has_no_rsvp() {
        let event = reunion();
        assert!(!event.is_registered("7"));
        assert!(!event.is_registered(""));
    }
}
