//! Direct message record.
//!
//! The portal ships no seed dataset for messages; the shape exists so a
//! messaging backend can be wired without changing consumers.

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// One direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub sender_id: EntityId,
    pub receiver_id: EntityId,
    pub content: String,
    pub timestamp: String,
    pub read: bool,
}
