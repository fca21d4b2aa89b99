use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn progression_path() -> String {
    workspace_root()
        .join("tests/fixtures/progression.txt")
        .to_string_lossy()
        .to_string()
}

fn host_data_path() -> String {
    workspace_root()
        .join("tests/fixtures/host_data.json")
        .to_string_lossy()
        .to_string()
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_collection-labels"))
        .args(args)
        .output()
        .expect("failed to run collection-labels CLI")
}

#[test]
fn cli_prints_resolved_pearl_labels() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data, "--pearls"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "pearl[0]=[Shoreline pearl 1]",
            "pearl[1]=[Shoreline pearl 2]",
            "pearl[2]=[Outskirts pearl]",
            "pearl[3]=[Music pearl]",
            "pearl[4]=[Spearmaster pearl]",
        ]
    );
}

#[test]
fn cli_prints_resolved_chatlog_labels() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data, "--chatlogs"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "chatlog[0]=[Live broadcast (Pre-event)]",
            "chatlog[1]=[Live broadcast (Post-event)]",
            "chatlog[2]=[Outskirts transmission 1]",
            "chatlog[3]=[Outskirts transmission 2]",
            "chatlog[4]=[Garbage Wastes transmission]",
        ]
    );
}

#[test]
fn cli_prints_the_region_panel() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data, "--panel"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[SHOW REMAINING BROADCAST LOCATIONS]"));
    assert!(stdout.contains("[ ] Outskirts"));
    assert!(stdout.contains("[ ] Garbage Wastes"));
}

#[test]
fn cli_disables_the_panel_for_an_unstarted_campaign() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[
        &progression,
        "--host-data",
        &host_data,
        "--campaign",
        "Red",
        "--panel",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[UNAVAILABLE]"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no save state found for campaign Red"));
}

#[test]
fn cli_json_output_carries_labels_and_panel() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data, "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(value["pearl_labels"][0], "[Shoreline pearl 1]");
    assert_eq!(value["chatlog_labels"][4], "[Garbage Wastes transmission]");
    assert_eq!(value["panel"]["post_pebbles"], true);

    let regions = value["panel"]["regions"]
        .as_array()
        .expect("regions should be an array");
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0]["acronym"], "SU");
    assert_eq!(regions[0]["remaining"], 1);
    assert_eq!(regions[1]["acronym"], "GW");
    assert_eq!(regions[1]["remaining"], 1);
}

#[test]
fn cli_without_field_flags_prints_the_text_view() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" ::: Pearls :::"));
    assert!(stdout.contains(" ::: Chatlogs :::"));
    assert!(stdout.contains("[SHOW REMAINING BROADCAST LOCATIONS]"));
}

#[test]
fn cli_rejects_json_combined_with_field_flags() {
    let progression = progression_path();
    let host_data = host_data_path();
    let output = run_cli(&[&progression, "--host-data", &host_data, "--json", "--pearls"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_fails_cleanly_on_a_missing_progression_file() {
    let host_data = host_data_path();
    let output = run_cli(&["/nonexistent/progression.txt", "--host-data", &host_data]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
