use crate::support::revisor;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("revisor.toml"),
        r#"
max_documents = 2
project_name = "Thesis Panel"
project_code = "TP-26"
"#,
    )
    .unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["--format", "records", "evaluate", "a.pdf", "b.pdf", "c.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "project=\"Thesis Panel\" code=\"TP-26\"",
        ))
        .stdout(predicate::str::contains("documents=2 dropped=1"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("revisor.toml"),
        "max_documents = 1\ndraw_sequence = \"compact\"\n",
    )
    .unwrap();

    revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "evaluate",
            "--max-documents",
            "3",
            "--draw-sequence",
            "legacy",
            "a.pdf",
            "b.pdf",
            "c.pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("draw=legacy documents=3 dropped=0"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "draw_sequence = \"compact\"\n").unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["--format", "records", "--config"])
        .arg(&config)
        .args(["evaluate", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("score=13.00"));
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "evaluate", "a.pdf"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_malformed_config_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("revisor.toml"), "max_documents = [").unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["--format", "json", "evaluate", "a.pdf"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid_config"));
}

#[test]
fn test_invalid_config_value_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("revisor.toml"), "max_documents = 0\n").unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "a.pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_documents"));
}
