use crate::support::revisor;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_default_logging_is_quiet() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--format", "json", "evaluate", "a.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_emits_debug_events() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--verbose", "--format", "json", "evaluate", "a.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document_scored"));
}

#[test]
fn test_log_level_info() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--log-level", "info", "--format", "json", "evaluate", "a.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("batch_complete"))
        .stderr(predicate::str::contains("document_scored").not());
}

#[test]
fn test_log_json() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args([
            "--log-level",
            "info",
            "--log-json",
            "--format",
            "json",
            "evaluate",
            "a.pdf",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
