mod common;

use std::process::Command;

use common::*;
use serde_json::json;
use wiremock::MockServer;

fn cli_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_paper-cli"));
    cmd.env_remove("PAPER_WORKFLOW_API_KEY")
        .env_remove("PAPER_WORKFLOW_BASE_URL")
        .env_remove("PAPER_WORKFLOW_TIMEOUT_MS")
        .env_remove("PAPER_WORKFLOW_USER");
    cmd
}

#[test]
fn test_cli_help() {
    let output = cli_command().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Draft paper outlines and full text"));
    assert!(stdout.contains("outline"));
    assert!(stdout.contains("titles"));
    assert!(stdout.contains("content"));
    assert!(stdout.contains("validate-key"));
}

#[test]
fn test_cli_version() {
    let output = cli_command().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("paper-cli"));
}

#[test]
fn test_cli_outline_help() {
    let output = cli_command().args(["outline", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generate a paper outline"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--word-count"));
}

#[test]
fn test_cli_content_requires_outline() {
    let output = cli_command().arg("content").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_validate_key_without_key() {
    let output = cli_command()
        .args(["--locale", "en", "validate-key"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter an API key to validate"));
}

#[test]
fn test_cli_rejects_word_count_out_of_range() {
    let output = cli_command()
        .args(["outline", "--title", "T", "--word-count", "10"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--word-count"));
}

#[test]
fn test_cli_rejects_unknown_locale() {
    let output = cli_command()
        .args(["--locale", "fr", "validate-key"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_outline_against_server() {
    let server = MockServer::start().await;
    mount_workflow(
        &server,
        json_response(200, json!({ "data": { "outputs": { "outline": "I. Intro\nII. Body" } } })),
        1,
    )
    .await;

    let output = cli_command()
        .args(["--base-url", &format!("{}/v1", server.uri())])
        .args(["outline", "--title", "Graph neural networks"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "I. Intro\nII. Body\n");

    let body = &recorded_bodies(&server).await[0];
    assert_eq!(body["inputs"]["word_count"], 3000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_reports_formatted_error() {
    let server = MockServer::start().await;
    mount_workflow(&server, json_response(401, json!({ "message": "bad token" })), 1).await;

    let output = cli_command()
        .args(["--base-url", &format!("{}/v1", server.uri())])
        .args(["--api-key", "wrong", "titles", "--seed", "graphs"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: bad token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_validate_key_invalid() {
    let server = MockServer::start().await;
    mount_workflow(&server, json_response(401, json!({})), 1).await;

    let output = cli_command()
        .args(["--base-url", &format!("{}/v1", server.uri())])
        .args(["--locale", "en", "--api-key", "wrong", "validate-key"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("API key is invalid"));
}
