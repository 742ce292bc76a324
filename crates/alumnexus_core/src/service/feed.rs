//! Feed use-cases: create post, like toggle, comments.
//!
//! # Responsibility
//! - Apply pure post mutations to the session-held post collection.
//! - Emit the toast payloads the portal shows for feed actions.
//!
//! # Invariants
//! - New posts are prepended; the feed stays newest-first.
//! - Author fields are denormalized from the current user at creation time
//!   and never re-synced afterwards.
//! - Mutations against a missing post id are no-ops.

use chrono::Utc;
use log::info;

use crate::model::post::{Comment, Post, Visibility};
use crate::model::user::User;
use crate::notify::{Notifier, Toast};

/// Returns the collection with a new post prepended.
///
/// The id is the next sequential string id; visibility defaults to public;
/// likes and comments start empty. Authors without a company or designation
/// fall back to the portal's placeholder strings.
pub fn create_post(posts: &[Post], author: &User, content: &str, created_at: &str) -> Vec<Post> {
    let post = Post {
        id: (posts.len() + 1).to_string(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.avatar.clone(),
        user_company: author
            .company
            .clone()
            .unwrap_or_else(|| "Company".to_string()),
        user_designation: author
            .designation
            .clone()
            .unwrap_or_else(|| "Professional".to_string()),
        content: content.to_string(),
        images: Vec::new(),
        likes: Vec::new(),
        comments: Vec::new(),
        visibility: Visibility::Public,
        created_at: created_at.to_string(),
    };

    let mut next = Vec::with_capacity(posts.len() + 1);
    next.push(post);
    next.extend(posts.iter().cloned());
    next
}

/// Returns the collection with the user's like toggled on one post.
pub fn toggle_like(posts: &[Post], post_id: &str, user_id: &str) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            let mut next = post.clone();
            if next.id == post_id {
                next.toggle_like(user_id);
            }
            next
        })
        .collect()
}

/// Returns the collection with a comment appended to one post.
///
/// The comment id is sequential within that post's comment list; no other
/// post is touched.
pub fn add_comment(
    posts: &[Post],
    post_id: &str,
    author: &User,
    content: &str,
    created_at: &str,
) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            let mut next = post.clone();
            if next.id == post_id {
                next.comments.push(Comment {
                    id: (next.comments.len() + 1).to_string(),
                    user_id: author.id.clone(),
                    user_name: author.name.clone(),
                    user_avatar: author.avatar.clone(),
                    content: content.to_string(),
                    created_at: created_at.to_string(),
                });
            }
            next
        })
        .collect()
}

/// Feed service owning the session's post collection.
pub struct FeedService<N: Notifier> {
    posts: Vec<Post>,
    notifier: N,
}

impl<N: Notifier> FeedService<N> {
    /// Creates a service over an initial post collection.
    pub fn new(posts: Vec<Post>, notifier: N) -> Self {
        Self { posts, notifier }
    }

    /// Current feed, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Creates a post authored by the current user.
    ///
    /// Blank content is rejected silently, matching the disabled composer
    /// button in the portal.
    pub fn create_post(&mut self, author: &User, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        self.posts = create_post(&self.posts, author, content, &Utc::now().to_rfc3339());
        info!(
            "event=post_created module=feed status=ok user_id={} post_count={}",
            author.id,
            self.posts.len()
        );
        self.notifier.notify(Toast::titled("Post created successfully!"));
    }

    /// Toggles the user's like on a post. No toast: likes are low-signal.
    pub fn toggle_like(&mut self, post_id: &str, user_id: &str) {
        self.posts = toggle_like(&self.posts, post_id, user_id);
    }

    /// Appends a comment to a post. Blank content is rejected silently.
    pub fn add_comment(&mut self, post_id: &str, author: &User, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        self.posts = add_comment(
            &self.posts,
            post_id,
            author,
            content,
            &Utc::now().to_rfc3339(),
        );
    }

    /// Consumes the service, returning the notifier for inspection.
    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
