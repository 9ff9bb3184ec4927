#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn wrk_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("wrk"));
    cmd.env("WRK_HOME", home.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("WRK_APP_KEY")
        .env_remove("WRK_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(home: &Path, json: &str) {
    fs::write(home.join("wrk-ids"), json).unwrap();
}

fn wrk_ids(home: &Path) -> String {
    fs::read_to_string(home.join("wrk-ids")).unwrap()
}

#[test]
fn test_type_mismatch_aborts_before_any_request() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), r#"[{"bob":"m:999"}]"#);

    // No credentials are configured, so reaching the network would fail
    // with a config error instead of the mismatch.
    wrk_cmd(temp.path())
        .args(["unassign", "bob"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The wrk-id [ bob ] is for members but the command is for [ cards ].",
        ));

    assert_eq!(wrk_ids(temp.path()), r#"[{"bob":"m:999"}]"#);
}

#[test]
fn test_invalid_arguments_print_usage_and_change_nothing() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), r#"[{"mycard":"c:abc123"}]"#);

    wrk_cmd(temp.path())
        .args(["unassign", "mycard", "mycard"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid arguments to command unassign: mycard mycard",
        ))
        .stdout(predicate::str::contains("wrk unassign <member> from <card>"));

    assert_eq!(wrk_ids(temp.path()), r#"[{"mycard":"c:abc123"}]"#);
}

#[test]
fn test_empty_comment_is_a_clean_noop() {
    let temp = TempDir::new().unwrap();

    wrk_cmd(temp.path())
        .args(["comment", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment was empty, doing nothing."));

    assert!(!temp.path().join("wrk-ids").exists());
}

#[test]
fn test_remote_commands_need_credentials() {
    let temp = TempDir::new().unwrap();

    wrk_cmd(temp.path())
        .args(["boards"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no Trello credentials"));

    assert!(!temp.path().join("wrk-ids").exists());
}

#[test]
fn test_ids_shows_head_frame() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        r#"[{"wrk1":"c:abc123","wrk2":"c:def456"},{"wrk1":"b:b1"}]"#,
    );

    wrk_cmd(temp.path())
        .args(["ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrk1"))
        .stdout(predicate::str::contains("c:def456"))
        .stdout(predicate::str::contains("b:b1").not());
}

#[test]
fn test_pop_unwinds_and_persists() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), r#"[{"wrk1":"c:abc123"},{"wrk1":"b:b1"}]"#);

    wrk_cmd(temp.path())
        .args(["pop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Popped 1 wrk-id set, 1 remaining."));

    assert_eq!(wrk_ids(temp.path()), r#"[{"wrk1":"b:b1"}]"#);

    wrk_cmd(temp.path())
        .args(["pop", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Popped 1 wrk-id set, 0 remaining."));

    assert_eq!(wrk_ids(temp.path()), "[]");
}

#[test]
fn test_pop_on_empty_history_still_writes() {
    let temp = TempDir::new().unwrap();

    wrk_cmd(temp.path())
        .args(["pop", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Popped 0 wrk-id sets, 0 remaining."));

    assert_eq!(wrk_ids(temp.path()), "[]");
}

#[test]
fn test_corrupt_cache_is_survivable() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "this is not json");

    wrk_cmd(temp.path())
        .args(["ids"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unreadable wrk-ids"))
        .stdout(predicate::str::contains("No wrk-ids remembered."));
}

#[test]
fn test_broken_config_only_blocks_remote_commands() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{ app_key: ").unwrap();
    seed(temp.path(), r#"[{"wrk1":"c:abc123"},{"wrk1":"b:b1"}]"#);

    wrk_cmd(temp.path())
        .args(["pop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Popped 1 wrk-id set, 1 remaining."));

    wrk_cmd(temp.path())
        .args(["ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b:b1"));

    wrk_cmd(temp.path())
        .args(["boards"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Serialization error"));

    assert_eq!(wrk_ids(temp.path()), r#"[{"wrk1":"b:b1"}]"#);
}

#[test]
fn test_unreadable_wrk_id_is_a_mismatch_and_keeps_history() {
    let temp = TempDir::new().unwrap();
    let stored = r#"[{"wrk1":"z:nope","wrk2":"c:abc123"},{"wrk1":"b:b1"}]"#;
    seed(temp.path(), stored);

    wrk_cmd(temp.path())
        .args(["close", "wrk1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The wrk-id [ wrk1 ] is for <unknown> (z:nope) but the command is for [ boards, lists, cards ].",
        ))
        .stderr(predicate::str::contains("Ignoring").not());

    assert_eq!(wrk_ids(temp.path()), stored);
}
