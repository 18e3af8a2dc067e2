//! Integration tests for the dd-cli commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ddash() -> Command {
    Command::cargo_bin("ddash").unwrap()
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = ddash().args(args).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

#[test]
fn summary_prints_all_cards() {
    ddash()
        .args(["summary", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Character Stats Summary")
                .and(predicate::str::contains("Avg Strength:"))
                .and(predicate::str::contains("Avg Charisma:"))
                .and(predicate::str::contains("Character Distribution"))
                .and(predicate::str::contains("- Average Character Stats"))
                .and(predicate::str::contains("\u{2014}").not())
                .and(predicate::str::contains("Character Grid"))
                .and(predicate::str::contains("100 of 100 characters match")),
        );
}

#[test]
fn summary_degenerate_ranges() {
    let doc = json_output(&[
        "summary",
        "--seed",
        "1",
        "-n",
        "5",
        "--strength",
        "10..10",
        "--dexterity",
        "10..10",
        "--constitution",
        "10..10",
        "--intelligence",
        "10..10",
        "--wisdom",
        "10..10",
        "--charisma",
        "10..10",
        "--json",
    ]);
    assert_eq!(doc["total"], 5);
    assert_eq!(doc["retained"], 5);
    assert_eq!(doc["averages"][0], "Avg Strength: 10.00");
    assert_eq!(doc["averages"][5], "Avg Charisma: 10.00");
    assert_eq!(doc["means"]["Wisdom"], 10.0);
    assert_eq!(doc["table"]["rows"].as_array().unwrap().len(), 5);
    assert_eq!(doc["chart"]["title"], "Average Character Stats");
}

#[test]
fn summary_json_shape() {
    let doc = json_output(&["summary", "--seed", "9", "--json"]);
    assert_eq!(doc["seed"], 9);
    assert_eq!(doc["averages"].as_array().unwrap().len(), 6);
    assert_eq!(doc["chart"]["bars"].as_array().unwrap().len(), 6);
    assert_eq!(doc["table"]["rows"].as_array().unwrap().len(), 10);
    assert_eq!(
        doc["table"]["columns"][0],
        serde_json::Value::from("Character")
    );
    assert_eq!(doc["ranges"]["strength"], serde_json::json!([8, 18]));
}

#[test]
fn summary_same_seed_same_output() {
    let a = json_output(&["summary", "--seed", "77", "--json"]);
    let b = json_output(&["summary", "--seed", "77", "--json"]);
    assert_eq!(a["means"], b["means"]);
    assert_eq!(a["table"], b["table"]);
}

#[test]
fn summary_empty_dataset_reports_no_data() {
    ddash()
        .args(["summary", "--seed", "3", "--count", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Avg Strength: no data")
                .and(predicate::str::contains("Avg Charisma: no data"))
                .and(predicate::str::contains("No characters match")),
        );
}

#[test]
fn summary_empty_dataset_json_nulls() {
    let doc = json_output(&["summary", "-n", "0", "--json"]);
    assert!(doc["means"]["Strength"].is_null());
    assert!(doc["chart"]["bars"][0]["value"].is_null());
}

#[test]
fn summary_rejects_inverted_range() {
    ddash()
        .args(["summary", "--strength", "15..10"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::starts_with("error: --strength: invalid range")
                .and(predicate::str::contains("min 15 is greater than max 10")),
        );
}

#[test]
fn summary_rejects_unparseable_range() {
    ddash()
        .args(["summary", "--dexterity", "lots"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: --dexterity: cannot parse range"));
}

#[test]
fn generate_rejects_inverted_range() {
    ddash()
        .args(["generate", "--wisdom", "16..12"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: --wisdom: invalid range"));
}

#[test]
fn summary_with_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dash.json");
    fs::write(
        &path,
        r#"{ "categories": ["Paladin"], "count": 12, "preview_limit": 3, "seed": 5 }"#,
    )
    .unwrap();

    let doc = json_output(&["summary", "--config", path.to_str().unwrap(), "--json"]);
    assert_eq!(doc["total"], 12);
    assert_eq!(doc["seed"], 5);
    let rows = doc["table"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r[0] == "Paladin"));
}

#[test]
fn summary_config_without_classes_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dash.json");
    fs::write(&path, r#"{ "categories": [] }"#).unwrap();

    ddash()
        .args(["summary", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains(
            "no character classes to choose from",
        )));
}

#[test]
fn summary_missing_config_fails() {
    ddash()
        .args(["summary", "--config", "/nonexistent/dash.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_prints_records() {
    let doc = json_output(&[
        "generate",
        "--seed",
        "4",
        "-n",
        "7",
        "--classes",
        "Bard,Monk",
        "--wisdom",
        "15..16",
    ]);
    let records = doc.as_array().unwrap();
    assert_eq!(records.len(), 7);
    for r in records {
        let class = r["character_class"].as_str().unwrap();
        assert!(class == "Bard" || class == "Monk");
        let wis = r["wisdom"].as_i64().unwrap();
        assert!((15..=16).contains(&wis));
        let str_ = r["strength"].as_i64().unwrap();
        assert!((8..=18).contains(&str_));
    }
}

#[test]
fn generate_zero_records() {
    let doc = json_output(&["generate", "-n", "0"]);
    assert_eq!(doc.as_array().unwrap().len(), 0);
}

#[test]
fn generate_blank_classes_fail() {
    ddash()
        .args(["generate", "--classes", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character classes"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    ddash()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("summary")
                .and(predicate::str::contains("generate"))
                .and(predicate::str::contains("tui")),
        );
}

#[test]
fn tui_rejects_bad_config_before_starting() {
    ddash()
        .args(["tui", "--config", "/nonexistent/dash.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}
