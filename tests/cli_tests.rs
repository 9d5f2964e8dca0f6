// Tests for the brewdigest binary
// Runs the built executable against scratch directories


use std::process::Command;
use test_helpers::{SAMPLE_SNAPSHOT, TestEnvironment};

fn brewdigest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brewdigest"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_file_names() {
    let env = TestEnvironment::new();
    env.write_data(SAMPLE_SNAPSHOT);
    env.write_leaves("git\n");

    let output = brewdigest()
        .current_dir(env.root())
        .output()
        .expect("Failed to run brewdigest");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 5 formulae and 2 casks"));
    assert!(stdout.contains("Report written to BREW_REPORT.md"));
    assert!(stdout.contains("1 cleanup candidates found"));

    assert!(env.read_report().starts_with("# Brew Analysis Report"));
}

#[test]
fn test_explicit_paths() {
    let env = TestEnvironment::new();
    let data = env.root().join("snapshot.json");
    let out = env.root().join("out.md");
    std::fs::write(&data, SAMPLE_SNAPSHOT).unwrap();

    let output = brewdigest()
        .arg("--data")
        .arg(&data)
        .arg("--leaves")
        .arg(env.root().join("does-not-exist.txt"))
        .arg("--output")
        .arg(&out)
        .output()
        .expect("Failed to run brewdigest");

    assert!(output.status.success());
    assert!(out.exists());
    assert!(!env.report.exists());
}

#[test]
fn test_stdout_mode_prints_only_report() {
    let env = TestEnvironment::new();
    env.write_data(SAMPLE_SNAPSHOT);

    let output = brewdigest()
        .current_dir(env.root())
        .arg("--stdout")
        .output()
        .expect("Failed to run brewdigest");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Brew Analysis Report"));
    assert!(!stdout.contains("Loading brew data"));
    assert!(!env.report.exists());
}

#[test]
fn test_missing_snapshot_fails() {
    let env = TestEnvironment::new();

    let output = brewdigest()
        .current_dir(env.root())
        .output()
        .expect("Failed to run brewdigest");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("brew_data.json"));
    assert!(!env.report.exists());
}
