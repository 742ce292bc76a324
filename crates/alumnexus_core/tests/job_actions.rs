use alumnexus_core::data::jobs_data;
use alumnexus_core::service::jobs::{apply_to_job, toggle_saved_job};
use alumnexus_core::{JobService, RecordingNotifier, ToastVariant};

#[test]
fn apply_is_idempotent() {
    let applied = apply_to_job(&[], "3");
    assert_eq!(applied, vec!["3".to_string()]);

    let again = apply_to_job(&applied, "3");
    assert_eq!(again, applied);
}

#[test]
fn save_toggle_is_symmetric() {
    let saved = toggle_saved_job(&[], "4");
    assert_eq!(saved, vec!["4".to_string()]);
    assert!(toggle_saved_job(&saved, "4").is_empty());
}

#[test]
fn job_service_apply_emits_one_toast_per_job() {
    let mut jobs = JobService::new(jobs_data(), RecordingNotifier::new());
    jobs.apply("1");
    jobs.apply("1"); // disabled action in the UI; no second toast
    assert!(jobs.has_applied("1"));
    assert_eq!(jobs.applied().len(), 1);

    // Applying never touches the posting's static counter.
    assert_eq!(jobs.jobs()[0].applications_count, 42);

    let notifier = jobs.into_notifier();
    assert_eq!(notifier.titles(), vec!["Application Submitted!"]);
    assert_eq!(
        notifier.toasts[0].description.as_deref(),
        Some("Your application has been sent successfully.")
    );
}

#[test]
fn job_service_save_announces_each_direction() {
    let mut jobs = JobService::new(jobs_data(), RecordingNotifier::new());
    jobs.toggle_saved("2");
    assert!(jobs.is_saved("2"));
    jobs.toggle_saved("2");
    assert!(!jobs.is_saved("2"));

    let notifier = jobs.into_notifier();
    assert_eq!(
        notifier.titles(),
        vec!["Job saved successfully!", "Job removed from saved"]
    );
    assert!(notifier
        .toasts
        .iter()
        .all(|toast| toast.variant == ToastVariant::Default));
}
