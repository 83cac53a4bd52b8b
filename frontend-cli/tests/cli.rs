//! End-to-end runs of the killlist binary against fixture process trees.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use nix::unistd::getuid;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use tempfile::tempdir;

fn killlist(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("killlist");
    cmd.env("KILLLIST_PROC_ROOT", root).env_remove("RUST_LOG");
    cmd
}

fn write_process(root: &Path, pid: &str, uid: u32, exe: Option<&str>, stat: Option<&str>) {
    let dir = root.join(pid);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("status"), format!("Name:\tx\nUid:\t{uid}\t{uid}\t{uid}\t{uid}\n")).unwrap();
    if let Some(exe) = exe {
        symlink(exe, dir.join("exe")).unwrap();
    }
    if let Some(stat) = stat {
        fs::write(dir.join("stat"), stat).unwrap();
    }
}

fn parse(stdout: &[u8]) -> Vec<(String, String)> {
    let json: Value = serde_json::from_slice(stdout).expect("stdout should be JSON");
    let mut entries: Vec<(String, String)> = json
        .as_array()
        .expect("top level should be an array")
        .iter()
        .map(|e| {
            (
                e["title"].as_str().unwrap().to_string(),
                e["command"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn prints_owned_processes_as_json() {
    let me = getuid().as_raw();
    let root = tempdir().unwrap();
    write_process(root.path(), "1234", me, Some("/usr/bin/bash"), None);
    write_process(root.path(), "1235", me, None, Some("1235 (python3) S 1234"));
    write_process(root.path(), "1236", me + 1, Some("/usr/bin/top"), None);
    fs::create_dir(root.path().join("sys")).unwrap();

    let output = killlist(root.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        parse(&output),
        vec![
            ("bash (1234)".to_string(), "kill 1234".to_string()),
            ("python3 (1235)".to_string(), "kill 1235".to_string()),
        ]
    );
}

#[test]
fn output_uses_two_space_indent() {
    let me = getuid().as_raw();
    let root = tempdir().unwrap();
    write_process(root.path(), "42", me, Some("/bin/sh"), None);

    killlist(root.path()).assert().success().stdout(
        "[\n  {\n    \"title\": \"sh (42)\",\n    \"command\": \"kill 42\"\n  }\n]\n",
    );
}

#[test]
fn no_owned_processes_prints_empty_array() {
    let root = tempdir().unwrap();
    killlist(root.path()).assert().success().code(0).stdout("[]\n");
}

#[test]
fn missing_root_exits_one_with_no_stdout() {
    let root = tempdir().unwrap();
    killlist(&root.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Failed to read "));
}

#[test]
fn proc_root_flag_takes_precedence_over_env() {
    let me = getuid().as_raw();
    let root = tempdir().unwrap();
    write_process(root.path(), "9", me, Some("/usr/bin/vim"), None);

    let mut cmd = cargo_bin_cmd!("killlist");
    cmd.env("KILLLIST_PROC_ROOT", "/nonexistent/proc")
        .arg("--proc-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vim (9)\""));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let root = tempdir().unwrap();
    killlist(root.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("scanning process tree"));
}

#[test]
fn stray_arguments_are_a_usage_error() {
    let root = tempdir().unwrap();
    killlist(root.path())
        .arg("unexpected")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn live_scan_includes_this_test_process() {
    let output = cargo_bin_cmd!("killlist")
        .env_remove("KILLLIST_PROC_ROOT")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parent = format!("kill {}", std::process::id());
    assert!(
        parse(&output).iter().any(|(_, command)| *command == parent),
        "the test runner's own pid should be listed"
    );
}
