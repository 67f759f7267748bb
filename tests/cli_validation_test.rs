//! Invalid options are reported with exit code 64 before any request is made.
//!
//! No access tokens are configured in these runs, so reaching the network
//! would surface as an authentication failure (exit code 100) instead.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLOW: &str = "5923cb07-ce1a-4a5c-ab81-257ce820109a";
const ENVIRONMENT: &str = "Default-d87a7535-dd31-4437-bfe1-95340acd55c5";

fn m365(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("m365").unwrap();
    cmd.env("M365_CONFIG_DIR", config_dir.path())
        .env_remove("M365_GRAPH_TOKEN")
        .env_remove("M365_AZMGMT_TOKEN")
        .env_remove("M365_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_principal() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["flow", "owner", "add", "-e", ENVIRONMENT, "-f", FLOW])
        .args(["--roleName", "CanView"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains(
            "Error: Specify either userId, userName, groupId, groupName",
        ));
}

#[test]
fn test_multiple_principals() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["flow", "owner", "add", "-e", ENVIRONMENT, "-f", FLOW])
        .args(["--userName", "john@contoso.com", "--groupName", "Team A"])
        .args(["--roleName", "CanView"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("but not multiple"));
}

#[test]
fn test_flow_name_must_be_guid() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["flow", "owner", "add", "-e", ENVIRONMENT, "-f", "abc"])
        .args(["--groupName", "Team A", "--roleName", "CanView"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("abc is not a valid GUID."));
}

#[test]
fn test_group_id_must_be_guid() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["flow", "owner", "add", "-e", ENVIRONMENT, "-f", FLOW])
        .args(["--groupId", "nope", "--roleName", "CanView"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("nope is not a valid GUID."));
}

#[test]
fn test_invalid_role_name_lists_allowed_values() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["flow", "owner", "add", "-e", ENVIRONMENT, "-f", FLOW])
        .args(["--groupName", "Team A", "--roleName", "Owner"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains(
            "Owner is not a valid roleName. Valid values are: CanView, CanEdit",
        ));
}

#[test]
fn test_blank_checklist_title() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["planner", "task", "checklistitem", "add"])
        .args(["--taskId", "vzCcZoOv-U27PwydxHB8opcADJo-", "--title", " "])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Specify a valid title"));
}

#[test]
fn test_parser_rejects_missing_required_option() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["planner", "task", "checklistitem", "add", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--taskId"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();
    m365(&dir)
        .args(["config", "set", "--timeout", "15"])
        .assert()
        .success();

    m365(&dir)
        .args(["config", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeout\":15"));

    m365(&dir)
        .args(["config", "get", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yml"));
}
