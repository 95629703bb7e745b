use crate::support::{revisor, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Evaluate command tests
// ============================================================================

#[test]
fn test_evaluate_single_document() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: Article Review (ART-REV)"))
        .stdout(predicate::str::contains("paper1.pdf"))
        .stdout(predicate::str::contains("12.00"))
        .stdout(predicate::str::contains("Context and relevance"))
        .stderr(predicate::str::contains("[1/1] 100% paper1.pdf"));
}

#[test]
fn test_evaluate_progress_percentage() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "a.pdf", "b.pdf", "c.pdf", "d.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/4]  25% a.pdf"))
        .stderr(predicate::str::contains("[2/4]  50% b.pdf"))
        .stderr(predicate::str::contains("[4/4] 100% d.pdf"));
}

#[test]
fn test_evaluate_uses_file_name_only() {
    let dir = tempdir().unwrap();
    let output = revisor()
        .current_dir(dir.path())
        .args(["--format", "json", "evaluate", "uploads/2024/paper1.pdf"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["document_id"], "paper1.pdf");
    assert_eq!(json["results"][0]["total_score"], 12.0);
}

#[test]
fn test_evaluate_is_deterministic() {
    let dir = tempdir().unwrap();
    let run = || {
        revisor()
            .current_dir(dir.path())
            .args(["--format", "records", "evaluate", "a.pdf", "thesis.docx"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_evaluate_json_dashboard() {
    let dir = tempdir().unwrap();
    let output = revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "evaluate",
            "paper1.pdf",
            "paper2.pdf",
            "paper3.pdf",
            "paper4.pdf",
            "paper5.pdf",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["count"], 5);
    assert_eq!(json["summary"]["mean"], 14.0);
    assert_eq!(json["summary"]["passing"], 3);
    assert_eq!(json["summary"]["passing_pct"], 60.0);
    assert_eq!(json["summary"]["max"], 16.0);
    assert_eq!(json["summary"]["min"], 11.0);
    assert_eq!(json["ranking"][0]["document_id"], "paper3.pdf");
    assert_eq!(json["ranking"][4]["document_id"], "paper2.pdf");
    assert_eq!(json["histogram"].as_array().unwrap().len(), 5);
    assert_eq!(json["draw_sequence"], "legacy");
    assert_eq!(json["rubric"]["source"], "builtin");

    let first = &json["results"][0];
    assert_eq!(first["criteria_results"].as_array().unwrap().len(), 6);
    assert_eq!(first["criteria_results"][0]["points_awarded"], 3);
    assert_eq!(first["criteria_results"][0]["tier"], "good");
}

#[test]
fn test_evaluate_caps_batch_reports_error_and_continues() {
    let dir = tempdir().unwrap();
    let output = revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "evaluate",
            "paper1.pdf",
            "paper2.pdf",
            "paper3.pdf",
            "paper4.pdf",
            "paper5.pdf",
            "paper6.pdf",
            "paper7.pdf",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: 7 documents submitted; only the first 5 are evaluated"));

    let json = stdout_json(&output);
    let ids: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["document_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["paper1.pdf", "paper2.pdf", "paper3.pdf", "paper4.pdf", "paper5.pdf"]
    );
    assert_eq!(json["dropped"][0], "paper6.pdf");
    assert_eq!(json["dropped"][1], "paper7.pdf");
}

#[test]
fn test_evaluate_max_documents_flag() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "evaluate",
            "--max-documents",
            "2",
            "a.pdf",
            "b.pdf",
            "c.pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("documents=2 dropped=1"));
}

#[test]
fn test_evaluate_empty_batch_is_usage_error() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .arg("evaluate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no documents to evaluate"));
}

#[test]
fn test_evaluate_empty_batch_json_envelope() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--format", "json", "evaluate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty_batch"));
}

#[test]
fn test_evaluate_compact_draw_sequence() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "evaluate",
            "--draw-sequence",
            "compact",
            "paper1.pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("draw=compact"))
        .stdout(predicate::str::contains("R 1 \"paper1.pdf\" score=13.00"));
}

#[test]
fn test_evaluate_invalid_draw_sequence() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "--draw-sequence", "shuffled", "a.pdf"])
        .assert()
        .code(2);
}

#[test]
fn test_evaluate_no_comments() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "--no-comments", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments").not());
}

#[test]
fn test_evaluate_quiet_prints_ranking_only() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["--quiet", "evaluate", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paper1.pdf"))
        .stdout(predicate::str::contains("Metrics").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_evaluate_unreadable_rubric_document_warns() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("rubric.docx"),
        [0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe],
    )
    .unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "--rubric-doc", "rubric.docx", "paper1.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not read rubric document"))
        .stderr(predicate::str::contains("using the default rubric"))
        .stdout(predicate::str::contains("12.00"));
}
