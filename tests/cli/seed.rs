use crate::support::{revisor, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Seed command tests
// ============================================================================

#[test]
fn test_seed_human() {
    revisor()
        .args(["seed", "a.pdf", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("941206066  a.pdf"))
        .stdout(predicate::str::contains("1699801019  paper1.pdf"));
}

#[test]
fn test_seed_empty_identifier() {
    revisor()
        .args(["--quiet", "seed", ""])
        .assert()
        .success()
        .stdout("419175444\n");
}

#[test]
fn test_seed_json() {
    let output = revisor()
        .args(["--format", "json", "seed", "a.pdf"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json[0]["identifier"], "a.pdf");
    assert_eq!(json[0]["seed"], 941206066);
    assert_eq!(json[0]["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn test_seed_records() {
    revisor()
        .args(["--format", "records", "seed", "paper1.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H revisor=1 records=1 mode=seed identifiers=1",
        ))
        .stdout(predicate::str::contains("S \"paper1.pdf\" seed=1699801019"));
}

#[test]
fn test_seed_requires_identifier() {
    revisor().arg("seed").assert().code(2);
}
