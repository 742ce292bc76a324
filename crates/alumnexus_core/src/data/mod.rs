//! In-memory mock datasets for the portal.
//!
//! # Responsibility
//! - Build every domain collection consumed at process start.
//! - Keep bulk-data generation deterministic and seed-addressable.
//!
//! # Invariants
//! - Dataset builders return fresh owned collections; UI-side mutation
//!   never feeds back into the generators.
//! - `alumni_data()` is stable across runs: curated records plus a
//!   fixed-seed generated tail.

mod records;
pub mod seed;

use crate::model::alumni::Alumni;
use crate::model::circular::Circular;
use crate::model::event::Event;
use crate::model::job::Job;
use crate::model::notification::Notification;
use crate::model::post::Post;

/// Full alumni directory: curated profiles 1-10 plus the generated tail
/// 11-55 from the default seed.
pub fn alumni_data() -> Vec<Alumni> {
    alumni_data_with_seed(seed::DEFAULT_SEED)
}

/// Alumni directory with a caller-chosen seed for the generated tail.
pub fn alumni_data_with_seed(generator_seed: u64) -> Vec<Alumni> {
    let mut alumni = records::curated_alumni();
    alumni.extend(seed::generated_alumni(generator_seed));
    alumni
}

/// Curated feed posts, newest first.
pub fn posts_data() -> Vec<Post> {
    records::curated_posts()
}

/// Curated job postings.
pub fn jobs_data() -> Vec<Job> {
    records::curated_jobs()
}

/// Curated alumni events.
pub fn events_data() -> Vec<Event> {
    records::curated_events()
}

/// Curated circulars.
pub fn circulars_data() -> Vec<Circular> {
    records::curated_circulars()
}

/// Curated notifications (all addressed to user "1").
pub fn notifications_data() -> Vec<Notification> {
    records::curated_notifications()
}
