//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `alumnexus_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::time::Duration;

use alumnexus_core::data;
use alumnexus_core::{partition_by_status, AuthService, FeedService, LogNotifier};

fn main() {
    println!("alumnexus_core version={}", alumnexus_core::core_version());

    let alumni = data::alumni_data();
    let partition = partition_by_status(&alumni);
    println!(
        "alumni total={} pending={} verified={} rejected={}",
        alumni.len(),
        partition.pending.len(),
        partition.verified.len(),
        partition.rejected.len()
    );
    println!("posts={}", data::posts_data().len());
    println!("jobs={}", data::jobs_data().len());
    println!("events={}", data::events_data().len());
    println!("circulars={}", data::circulars_data().len());
    println!("notifications={}", data::notifications_data().len());

    // Exercise one end-to-end mutation; toasts route into the log since a
    // terminal has no toast surface.
    let mut auth = AuthService::with_latency(Duration::ZERO);
    match auth.login("john@alumni.com", "password123") {
        Ok(user) => {
            let mut feed = FeedService::new(data::posts_data(), LogNotifier);
            feed.create_post(&user, "Smoke-check post from the CLI.");
            println!("feed after post={}", feed.posts().len());
        }
        Err(err) => println!("login failed: {err}"),
    }
}
