// Command-line behavior of the gosearch binary

use std::process::Command;

fn gosearch_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gosearch")
}

#[test]
fn test_missing_query_exits_with_usage() {
    let output = Command::new(gosearch_bin())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run gosearch");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--limit"));
}

#[test]
fn test_invalid_limit_is_rejected() {
    let output = Command::new(gosearch_bin())
        .args(["--limit", "many", "router"])
        .output()
        .expect("Failed to run gosearch");

    assert!(!output.status.success());
}

#[test]
fn test_request_url_printed_before_fetch() {
    // Nothing listens on port 9, so the request itself fails
    let output = Command::new(gosearch_bin())
        .args(["--color", "never", "--base-url", "http://127.0.0.1:9"])
        .args(["--limit", "3", "http", "router"])
        .output()
        .expect("Failed to run gosearch");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(
        "Searching pkg.go.dev for: http router\n\
         Request URL: http://127.0.0.1:9/search?q=http+router&limit=3&m=package\n\n"
    ));
    assert!(!stdout.contains("No results found."));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to search pkg.go.dev for 'http router'"));
}

#[test]
#[ignore] // Requires network access to pkg.go.dev
fn test_search_prints_request_url() {
    let output = Command::new(gosearch_bin())
        .args(["--color", "never", "--limit", "3", "http", "router"])
        .output()
        .expect("Failed to run gosearch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Searching pkg.go.dev for: http router"));
    assert!(stdout.contains("Request URL: https://pkg.go.dev/search?q=http+router&limit=3&m=package"));
}
