//! Integration tests for the `frontdesk` CLI binary.
//!
//! Parsing, help output, completions, and error handling run without a
//! backend; the rest talk to a wiremock server through `--url`.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `frontdesk` binary with env isolation.
///
/// Clears all `FRONTDESK_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn frontdesk_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("frontdesk");
    cmd.env("HOME", "/tmp/frontdesk-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/frontdesk-cli-test-nonexistent")
        .env_remove("FRONTDESK_PROFILE")
        .env_remove("FRONTDESK_URL")
        .env_remove("FRONTDESK_API_PATH")
        .env_remove("FRONTDESK_OUTPUT")
        .env_remove("FRONTDESK_COLOR")
        .env_remove("FRONTDESK_INSECURE")
        .env_remove("FRONTDESK_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary against `url` off the async runtime.
async fn run_against(url: String, args: &[&str]) -> std::process::Output {
    let args: Vec<String> = args.iter().map(|a| (*a).to_owned()).collect();
    tokio::task::spawn_blocking(move || {
        frontdesk_cmd()
            .args(["--url", url.as_str(), "--color", "never"])
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_rooms(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "r1", "number": 101, "type": "single", "price": 80, "status": "available" },
            { "_id": "r2", "number": 201, "type": "suite", "price": 320, "status": "occupied" },
        ])))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = frontdesk_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    frontdesk_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("rooms")
            .and(predicate::str::contains("guests"))
            .and(predicate::str::contains("bookings"))
            .and(predicate::str::contains("dashboard")),
    );
}

#[test]
fn test_version_flag() {
    frontdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontdesk"));
}

#[test]
fn test_bookings_subcommands_exist() {
    frontdesk_cmd()
        .args(["bookings", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("check-in"))
                .and(predicate::str::contains("check-out")),
        );
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    frontdesk_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    frontdesk_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = frontdesk_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_rooms_list_without_config() {
    let output = frontdesk_cmd().args(["rooms", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("config") || text.contains("Configuration"),
        "Expected a configuration hint:\n{text}"
    );
}

#[test]
fn test_config_show_no_config() {
    frontdesk_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = frontdesk_cmd()
        .args(["--output", "invalid", "rooms", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_room_type() {
    frontdesk_cmd()
        .args([
            "--url",
            "http://127.0.0.1:9",
            "rooms",
            "add",
            "--number",
            "101",
            "--type",
            "penthouse",
            "--price",
            "80",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("penthouse"));
}

#[test]
fn test_delete_requires_yes_without_tty() {
    let output = frontdesk_cmd()
        .args(["--url", "http://127.0.0.1:9", "rooms", "delete", "r1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("requires confirmation"),
        "Expected a confirmation error:\n{text}"
    );
}

// ── Against a backend ───────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_list_json() {
    let server = MockServer::start().await;
    mount_rooms(&server).await;

    let output = run_against(server.uri(), &["-o", "json", "rooms", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert!(String::from_utf8_lossy(&output.stdout).contains("r1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_list_available_table() {
    let server = MockServer::start().await;
    mount_rooms(&server).await;

    let output = run_against(server.uri(), &["rooms", "list", "--available"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("101"));
    assert!(!stdout.contains("201"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Showing 1 available rooms"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_add_rejects_bad_number() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_against(
        server.uri(),
        &[
            "rooms", "add", "--number", "abc", "--type", "single", "--price", "80",
        ],
    )
    .await;
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_delete_with_yes() {
    let server = MockServer::start().await;
    mount_rooms(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/rooms/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(server.uri(), &["--yes", "rooms", "delete", "r1"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Room deleted successfully!"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_out_of_booked_stay_is_a_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "b2",
            "guestId": "g1",
            "roomId": "r1",
            "checkIn": "2026-03-10",
            "checkOut": "2026-03-12",
            "status": "booked"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_against(server.uri(), &["bookings", "check-out", "b2"]).await;
    assert_eq!(output.status.code(), Some(6), "{}", combined_output(&output));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let output = run_against("http://127.0.0.1:9".into(), &["status"]).await;
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}
