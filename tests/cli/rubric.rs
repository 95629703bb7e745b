use crate::support::{revisor, stdout_json};
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Write a minimal Word document whose body holds one paragraph per entry
fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"))
        .collect();
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    write!(
        zip,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
    .unwrap();
    zip.finish().unwrap();
}

// ============================================================================
// Rubric command tests
// ============================================================================

#[test]
fn test_rubric_human() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .arg("rubric")
        .assert()
        .success()
        .stdout(predicate::str::contains("Context and relevance"))
        .stdout(predicate::str::contains("Structure and flow"))
        .stdout(predicate::str::contains("Total"))
        .stdout(predicate::str::contains("20 pts"));
}

#[test]
fn test_rubric_json() {
    let dir = tempdir().unwrap();
    let output = revisor()
        .current_dir(dir.path())
        .args(["--format", "json", "rubric"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total_points"], 20);
    assert_eq!(json["criteria"].as_array().unwrap().len(), 6);
    assert_eq!(json["criteria"][0]["name"], "Context and relevance");
    assert_eq!(json["criteria"][0]["max_points"], 4);
    assert_eq!(json["reference"]["source"], "builtin");
}

#[test]
fn test_rubric_with_text_document() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("rubric.md"),
        "# Faculty rubric\n\nClarity of argument\n",
    )
    .unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["rubric", "--rubric-doc", "rubric.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference document:"))
        .stdout(predicate::str::contains("Clarity of argument"));
}

#[test]
fn test_rubric_document_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("criteria.txt"), "Originality\n").unwrap();
    fs::write(
        dir.path().join("revisor.toml"),
        "rubric_document = \"criteria.txt\"\n",
    )
    .unwrap();

    revisor()
        .current_dir(dir.path())
        .args(["--format", "records", "rubric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference=document"))
        .stdout(predicate::str::contains("L \"Originality\""));
}

#[test]
fn test_rubric_missing_document_falls_back() {
    let dir = tempdir().unwrap();
    revisor()
        .current_dir(dir.path())
        .args(["rubric", "--rubric-doc", "absent.docx"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using the default rubric"))
        .stdout(predicate::str::contains("Context and relevance"));
}

#[test]
fn test_rubric_docx_discovered_in_root() {
    let dir = tempdir().unwrap();
    write_docx(
        &dir.path().join("rubric.docx"),
        &["Faculty rubric 2024", "", "Depth of analysis (4 pts)"],
    );

    revisor()
        .current_dir(dir.path())
        .arg("rubric")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference document:"))
        .stdout(predicate::str::contains("Faculty rubric 2024"))
        .stdout(predicate::str::contains("Depth of analysis (4 pts)"));
}

#[test]
fn test_rubric_docx_records_lines() {
    let dir = tempdir().unwrap();
    write_docx(&dir.path().join("RubricFinal.docx"), &["Originality"]);

    revisor()
        .current_dir(dir.path())
        .args(["--format", "records", "rubric", "--rubric-doc", "RubricFinal.docx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference=document"))
        .stdout(predicate::str::contains("L \"Originality\""));
}
