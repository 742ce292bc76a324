use alumnexus_core::{default_log_level, init_logging, logging_status};
use tempfile::TempDir;

// Logging state is process-global, so the whole lifecycle lives in one test.
#[test]
fn init_is_idempotent_and_rejects_reconfiguration() {
    let dir = TempDir::new().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    assert!(logging_status().is_none());
    init_logging("info", dir_str).unwrap();

    let (level, log_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(log_dir, dir.path());

    // Same configuration: idempotent.
    init_logging("info", dir_str).unwrap();

    // Different level or directory: rejected.
    assert!(init_logging("debug", dir_str).is_err());
    let other = TempDir::new().unwrap();
    assert!(init_logging("info", other.path().to_str().unwrap()).is_err());
}

#[test]
fn invalid_inputs_are_rejected_without_initializing() {
    assert!(init_logging("verbose", "/tmp/alumnexus-test-logs").is_err());
    assert!(init_logging("info", "relative/path").is_err());
    assert!(init_logging("info", "").is_err());
}

#[test]
fn default_level_is_a_known_level() {
    assert!(matches!(default_log_level(), "debug" | "info"));
}
