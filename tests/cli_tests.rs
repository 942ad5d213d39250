use std::io::Write;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::NamedTempFile;

const SCENARIO: &str = r#"{
    "users": [
        {"username": "alice", "name": "Alice Johnson", "age": 25, "location": "Paris"},
        {"username": "bob", "name": "Bob Smith", "age": 28},
        {"username": "charlie", "name": "Charlie Brown", "age": 22},
        {"username": "diana", "name": "Diana Ross", "age": 30}
    ],
    "friendships": [
        ["alice", "bob"],
        ["alice", "charlie"],
        ["bob", "charlie"],
        ["charlie", "diana"]
    ]
}"#;

fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write dataset");
    file
}

fn run_json(file: &NamedTempFile, args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_socialgraph"))
        .arg("--graph")
        .arg(file.path())
        .args(args)
        .output()
        .expect("run");
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("json output")
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_socialgraph"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_status_without_graph() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_socialgraph"));
    cmd.args(["--command", "status"]);
    cmd.assert().success();
}

#[test]
fn test_cli_path_command() {
    let file = dataset_file(SCENARIO);
    let value = run_json(&file, &["path", "--user", "alice", "--target", "diana"]);
    assert_eq!(value["degrees"], 2);
    assert_eq!(value["path"][1], "charlie");
}

#[test]
fn test_cli_recommend_and_stats() {
    let file = dataset_file(SCENARIO);
    let recs = run_json(&file, &["--command", "recommend", "--user", "alice"]);
    assert_eq!(recs[0]["user"], "diana");
    assert_eq!(recs[0]["mutual_count"], 1);

    let stats = run_json(&file, &["stats"]);
    assert_eq!(stats["user_count"], 4);
    assert_eq!(stats["friendship_count"], 4);
}

#[test]
fn test_cli_snapshot_command() {
    let file = dataset_file(SCENARIO);
    let snapshot = run_json(&file, &["snapshot"]);
    assert_eq!(snapshot["edges"].as_array().map(Vec::len), Some(4));
    assert_eq!(snapshot["nodes"][2]["degree"], 3);
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_socialgraph"));
    cmd.arg("--bogus");
    cmd.assert().failure().code(2);
}

#[test]
fn test_cli_unknown_user_fails() {
    let file = dataset_file(SCENARIO);
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_socialgraph"));
    cmd.arg("--graph")
        .arg(file.path())
        .args(["bfs", "--user", "ghost"]);
    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_bad_dataset_fails() {
    let file = dataset_file("{\"users\": [");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_socialgraph"));
    cmd.arg("--graph").arg(file.path()).arg("status");
    cmd.assert().failure().code(2);
}
