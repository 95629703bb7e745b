use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for revisor
pub fn revisor() -> Command {
    cargo_bin_cmd!("revisor")
}

/// Parse stdout of a `--format json` run
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
