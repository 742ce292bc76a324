//! Feed post and comment records.
//!
//! # Responsibility
//! - Define the social-feed post shape with denormalized author fields.
//! - Keep like/comment collection semantics next to the data they govern.
//!
//! # Invariants
//! - `likes` has set semantics: each user id appears at most once.
//! - `comments` is append-ordered; insertion order is chronological and
//!   authoritative for display.
//! - Author fields are captured at creation time and never re-synced with
//!   the alumni directory (explicit non-guarantee, not an oversight).

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// Audience scope of a feed post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to the whole network.
    Public,
    /// Visible to the author's batch only.
    Batch,
}

/// Comment owned exclusively by its parent post.
///
/// Comment ids are sequential within that post's comment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub user_id: EntityId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: String,
}

/// Social-feed post with denormalized author fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub user_id: EntityId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub user_company: String,
    pub user_designation: String,
    pub content: String,
    pub images: Vec<String>,
    pub likes: Vec<EntityId>,
    pub comments: Vec<Comment>,
    pub visibility: Visibility,
    pub created_at: String,
}

impl Post {
    /// Returns whether the given user currently likes this post.
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    /// Toggles the user's membership in `likes`: removed when present,
    /// appended when absent. Never produces a duplicate entry.
    pub fn toggle_like(&mut self, user_id: &str) {
        if self.liked_by(user_id) {
            self.likes.retain(|id| id != user_id);
        } else {
            self.likes.push(user_id.to_string());
        }
    }
}
