//! CLI end-to-end tests
//!
//! Tests for the elemental command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the elemental binary
#[allow(deprecated)]
fn elemental_cmd() -> Command {
    Command::cargo_bin("elemental").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_str().unwrap().to_string()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = elemental_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = elemental_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("elemental"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = elemental_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("elemental "));
}

#[test]
fn test_cli_inspect_help() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--kind"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_cli_inspect_nonexistent_file() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "/nonexistent/path/job.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_inspect_job_envelope_as_text() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", &fixture_arg("get_job.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Id: 1600000000000-abc123"))
        .stdout(predicate::str::contains("Status: COMPLETE"))
        .stdout(predicate::str::contains("UserMetadata: {customer=acme}"))
        .stdout(predicate::str::contains(
            "AacSettings: {Bitrate: 96000,CodingMode: CODING_MODE_2_0,SampleRate: 48000}",
        ));
}

#[test]
fn test_cli_inspect_warns_about_unknown_values() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", &fixture_arg("get_job.json")])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: AccelerationStatus: PARTIALLY_ACCELERATED is not a known AccelerationStatus value",
        ));
}

#[test]
fn test_cli_inspect_strict_fails_on_unknown_values() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "--strict", &fixture_arg("get_job.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 unknown enumeration value"));
}

#[test]
fn test_cli_inspect_strict_passes_clean_document() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "--strict", &fixture_arg("list_presets.json")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{NextToken: page-2,Presets: ["))
        .stdout(predicate::str::contains("Name: web-720p"))
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn test_cli_inspect_json_keeps_unknown_values() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "--format", "json", &fixture_arg("get_job.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""accelerationStatus": "PARTIALLY_ACCELERATED""#,
        ))
        .stdout(predicate::str::contains(r#""type": "FILE_GROUP_SETTINGS""#));
}

#[test]
fn test_cli_inspect_bare_document_with_kind() {
    let mut cmd = elemental_cmd();
    cmd.args([
        "inspect",
        "--kind",
        "create-job-request",
        &fixture_arg("create_job_request.json"),
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff(
        "{JobTemplate: vod-hls-cmaf,Priority: 10,\
         Role: arn:aws:iam::111122223333:role/MediaConvertRole,\
         StatusUpdateInterval: SECONDS_30,UserMetadata: {title=trailer}}\n",
    ));
}

#[test]
fn test_cli_inspect_kind_conflicts_with_envelope() {
    let mut cmd = elemental_cmd();
    cmd.args(["inspect", "--kind", "preset", &fixture_arg("get_job.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("envelope"));
}

#[test]
fn test_cli_inspect_malformed_json() {
    let temp = tempdir().unwrap();
    let doc = temp.path().join("broken.json");
    fs::write(&doc, "{\"job\": ").unwrap();

    let mut cmd = elemental_cmd();
    cmd.args(["inspect", doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load document"));
}

#[test]
fn test_cli_inspect_with_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("elemental.toml");

    fs::write(
        &config_file,
        r#"
[output]
format = "json"
pretty = false

[input]
default_kind = "create-job-request"
"#,
    )
    .unwrap();

    let mut cmd = elemental_cmd();
    cmd.args([
        "inspect",
        "--config",
        config_file.to_str().unwrap(),
        &fixture_arg("create_job_request.json"),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""jobTemplate":"vod-hls-cmaf""#))
    .stdout(predicate::str::contains(r#""userMetadata":{"title":"trailer"}"#));
}

#[test]
fn test_cli_config_strict_enums() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("elemental.toml");
    fs::write(&config_file, "[input]\nstrict_enums = true\n").unwrap();

    let mut cmd = elemental_cmd();
    cmd.args([
        "inspect",
        "--config",
        config_file.to_str().unwrap(),
        &fixture_arg("get_job.json"),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown enumeration value"));
}

#[test]
fn test_cli_enums_lists_all() {
    let mut cmd = elemental_cmd();
    cmd.arg("enums")
        .assert()
        .success()
        .stdout(predicate::str::contains("AacRateControlMode"))
        .stdout(predicate::str::contains("H264RateControlMode"))
        .stdout(predicate::str::contains("JobStatus"));
}

#[test]
fn test_cli_enums_lists_values_case_insensitively() {
    let mut cmd = elemental_cmd();
    cmd.args(["enums", "aacratecontrolmode"])
        .assert()
        .success()
        .stdout(predicate::str::diff("CBR\nVBR\n"));
}

#[test]
fn test_cli_enums_unknown_name() {
    let mut cmd = elemental_cmd();
    cmd.args(["enums", "NoSuchEnumeration"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown enumeration"));
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("elemental.toml");
    fs::write(&config_file, "[output]\nformat = \"json\"\n").unwrap();

    let mut cmd = elemental_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Output format: Json"));
}

#[test]
fn test_cli_validate_rejects_bad_values() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("elemental.toml");
    fs::write(&config_file, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = elemental_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
