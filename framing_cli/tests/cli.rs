//! Integration tests for the framer CLI.
//!
//! These run the built binary and verify end-to-end behavior.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn framer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_framer"))
        .args(args)
        .env_remove("FRAMER_STORE")
        .env_remove("FRAMER_LOG")
        .output()
        .expect("Failed to execute framer")
}

fn framer_with_store(store: &Path, args: &[&str]) -> Output {
    let mut all = vec!["--store", store.to_str().unwrap()];
    all.extend_from_slice(args);
    framer(&all)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn calc_wood_needed_json_for_square_cabin() {
    let output = framer(&["calc-wood-needed", "-w", "10", "-l", "10", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value, serde_json::json!({ "studs": 53, "posts": 5 }));
}

#[test]
fn calc_wood_needed_text_output() {
    let output = framer(&["calc-wood-needed", "--width", "30", "--length", "10"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Studs: 95"), "got: {}", text);
    assert!(text.contains("Posts: 7"), "got: {}", text);
}

#[test]
fn calc_wood_needed_breakdown() {
    let output = framer(&["calc-wood-needed", "-w", "30", "-l", "10", "--breakdown", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["width_wall"]["boards"], 31);
    assert_eq!(value["length_wall"]["boards"], 12);
    assert_eq!(value["requirements"]["studs"], 95);
}

#[test]
fn units_flag_is_accepted_but_not_applied() {
    let output = framer(&["calc-wood-needed", "-w", "10", "-l", "10", "-u", "inches", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["studs"], 53);
    assert!(stderr(&output).contains("not applied"));
}

#[test]
fn invalid_dimension_fails_with_structured_error() {
    let output = framer(&["calc-wood-needed", "-w", "-10", "-l", "10"]);
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.contains("InvalidDimension"), "got: {}", err);
    assert!(err.contains("width_ft"), "got: {}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn house_records_create_list_show_remove() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("houses.json");

    let created = framer_with_store(&store, &["houses", "create", "Cabin", "-w", "30", "-l", "10"]);
    assert!(created.status.success(), "stderr: {}", stderr(&created));
    assert!(store.exists());

    let listed = framer_with_store(&store, &["houses", "list"]);
    assert!(stdout(&listed).contains("Cabin"));

    let shown = framer_with_store(&store, &["houses", "show", "Cabin", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&shown)).unwrap();
    assert_eq!(value["requirements"], serde_json::json!({ "studs": 95, "posts": 7 }));

    let supplies = framer_with_store(&store, &["houses", "supplies", "Cabin"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&supplies)).unwrap();
    assert_eq!(value["width_wall"]["plates"], 8);

    let removed = framer_with_store(&store, &["houses", "remove", "Cabin"]);
    assert!(removed.status.success());

    let missing = framer_with_store(&store, &["houses", "show", "Cabin"]);
    assert!(!missing.status.success());
    assert!(stderr(&missing).contains("HOUSE_NOT_FOUND") || stderr(&missing).contains("HouseNotFound"));
}

#[test]
fn duplicate_house_is_rejected() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("houses.json");

    let first = framer_with_store(&store, &["houses", "create", "Shed", "-w", "8", "-l", "10"]);
    assert!(first.status.success());

    let second = framer_with_store(&store, &["houses", "create", "Shed", "-w", "9", "-l", "10"]);
    assert!(!second.status.success());
    assert!(stderr(&second).contains("already exists"));

    let saved = framer_with_store(&store, &["houses", "save", "Shed", "-w", "9", "-l", "10"]);
    assert!(saved.status.success());
    assert!(stdout(&saved).contains("Updated"));
}

#[test]
fn empty_store_lists_nothing() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("houses.json");

    let output = framer_with_store(&store, &["houses", "list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No houses stored."));
}
