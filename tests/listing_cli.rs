//! Integration test: `--list` prints the filtered entries and exits

use std::process::{Command, Output};

fn run_listing(args: &[&str], log_name: &str) -> Output {
    let log_path = std::env::temp_dir().join(log_name);
    Command::new(env!("CARGO_BIN_EXE_versebook"))
        .args(args)
        .env("VERSEBOOK_CONFIG", "/nonexistent/versebook/config.toml")
        .env("VERSEBOOK_LOG", &log_path)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn json_listing_for_chapter() {
    let output = run_listing(&["--list", "--json", "-c", "8"], "versebook_listing_json.log");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let records = records.as_array().expect("top level should be an array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["position"], 14);
    assert_eq!(records[0]["korean"], "8-1 밤이 밝으면 길이 보인다");
    assert!(records[0].get("japanese").is_some());
    assert!(records[0].get("english").is_some());
    assert!(records[0].get("commentary").is_some());
}

#[test]
fn plain_listing_numbers_full_list_positions() {
    let output = run_listing(&["--list", "-c", "8"], "versebook_listing_plain.log");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("14. 8-1 밤이 밝으면 길이 보인다\n"),
        "unexpected listing: {}",
        stdout
    );
}

#[test]
fn open_is_rejected_with_list() {
    let output = run_listing(&["--list", "--open", "3"], "versebook_listing_open.log");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}

#[test]
fn open_outside_store_is_rejected() {
    let output = run_listing(&["--open", "26"], "versebook_listing_range.log");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--open 26 is outside 1..=25"));
}
