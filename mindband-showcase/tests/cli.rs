use std::io::Write;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn showcase() -> Command {
    let mut cmd = cargo_bin_cmd!("mindband-showcase");
    cmd.env_remove("RUST_LOG")
        .env_remove("MINDBAND_CONFIG")
        .env_remove("MINDBAND_TRANSITION_MS")
        .env_remove("MINDBAND_RESIZE_POLICY");
    cmd
}

#[test]
fn help_lists_subcommands() {
    showcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("features"))
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn select_prints_description() {
    showcase()
        .args(["select", "sleep-tracking"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[fa-moon #a175ff] Sleep tracking",
        ))
        .stdout(predicate::str::contains("EEG sensors"));
}

#[test]
fn select_unknown_fails() {
    showcase()
        .args(["select", "unknown-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown-id"));
}

#[test]
fn features_json_lists_all_seven() {
    let output = showcase()
        .args(["features", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 7);
    assert_eq!(list[0]["id"], "health-monitoring-and-fitness");
    assert_eq!(list[0]["heading"], "Health monitoring and fitness");
}

#[test]
fn run_script_wraps_and_resets() {
    showcase()
        .args(["--width", "1280", "run", "prev", "next", "resize=600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prev: index=3 offset=900px"))
        .stdout(predicate::str::contains("next: index=0 offset=0px"))
        .stdout(predicate::str::contains("resize=600: index=0 offset=0px x=0px visible=1"));
}

#[test]
fn config_file_switches_resize_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[carousel]\nresize_policy = \"clamp\"").unwrap();

    showcase()
        .arg("--width")
        .arg("500")
        .arg("--config")
        .arg(file.path())
        .args(["run", "next", "next", "resize=1280"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resize=1280: index=2 offset=600px"));
}

#[test]
fn rejects_bad_step() {
    showcase()
        .args(["run", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step"));
}
