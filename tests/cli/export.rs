use crate::support::revisor;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Report export tests
// ============================================================================

fn exported_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_export_markdown_report() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args([
            "evaluate",
            "--export",
            "reports",
            "paper1.pdf",
            "paper2.pdf",
            "paper3.pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let files = exported_files(&dir.path().join("reports"));
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("review_report_art-rev_"));
    assert!(files[0].ends_with(".md"));

    let content = fs::read_to_string(dir.path().join("reports").join(&files[0])).unwrap();
    assert!(content.starts_with("# SIMULATED REVIEW REPORT"));
    assert!(content.contains("| # | Document | Score (0-20) |"));
    assert!(content.contains("| 1 | paper1.pdf | 12.00 |"));
    assert_eq!(content.matches("| Criterion | Pts | Max | Comment |").count(), 3);
    assert_eq!(content.matches("\\newpage").count(), 3);
}

#[test]
fn test_export_json_report_with_labels() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args([
            "--quiet",
            "evaluate",
            "--export",
            "out",
            "--report-format",
            "json",
            "--project-name",
            "Graduate Seminar",
            "--project-code",
            "GS/01",
            "a.pdf",
        ])
        .assert()
        .success();

    let files = exported_files(&dir.path().join("out"));
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("review_report_gs-01_"));
    assert!(files[0].ends_with(".json"));

    let content = fs::read_to_string(dir.path().join("out").join(&files[0])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["project_name"], "Graduate Seminar");
    assert_eq!(json["project_code"], "GS/01");
    assert_eq!(json["documents"][0]["document_id"], "a.pdf");
    assert_eq!(json["documents"][0]["total_score"], "13.00");
}

#[test]
fn test_export_path_listed_in_json_output() {
    let dir = tempdir().unwrap();
    let output = revisor()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "evaluate",
            "--export",
            "out",
            "--report-format",
            "records",
            "a.pdf",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let exported = json["exports"][0].as_str().unwrap();
    assert!(exported.ends_with(".txt"));
}

#[test]
fn test_pdf_requires_export_dir() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "--pdf", "a.pdf"])
        .assert()
        .code(2);
}

#[test]
#[ignore] // Requires pandoc to be installed
fn test_export_pdf() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["evaluate", "--export", "out", "--pdf", "paper1.pdf"])
        .assert()
        .success();

    let files = exported_files(&dir.path().join("out"));
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.ends_with(".md")));
    assert!(files.iter().any(|f| f.ends_with(".pdf")));
}
