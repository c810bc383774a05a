// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for command scripts loaded from configuration files.

use std::fs;
use std::io::Cursor;

use puka_cuckoo_lib::config::{ConfigLoader, OutputFormat};
use puka_cuckoo_lib::error::PukaError;
use puka_cuckoo_lib::script::{Outcome, ScriptRunner};

fn load_runner(config_toml: &str) -> (tempfile::TempDir, ScriptRunner) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puka.toml");
    fs::write(&path, config_toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "PUKA_SCRIPT_TEST").load().unwrap();
    (dir, ScriptRunner::from_config(&config))
}

#[test]
fn test_text_script() {
    let (_dir, mut runner) = load_runner("[table]\ncapacity = 7\n");
    let script = "\
# build up a few keys
insert apple
insert pear
insert apple
find pear
undo
find pear
remove apple
undo
capacity
";
    let mut out = Vec::new();
    assert_eq!(runner.run_script(script, &mut out).unwrap(), 9);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("insert apple: ok"));
    assert_eq!(
        lines[2],
        "insert apple: failed (Key already exists in the table: apple)"
    );
    assert!(lines[3].starts_with("find pear: found"));
    assert_eq!(lines[4], "undo: reverted (size 1)");
    assert_eq!(lines[5], "find pear: not found");
    assert_eq!(lines[6], "remove apple: removed (size 0)");
    assert_eq!(lines[7], "undo: nothing to undo (size 0)");
    assert_eq!(lines[8], "capacity: 7");
}

#[test]
fn test_json_output() {
    let (_dir, mut runner) = load_runner("[table]\ncapacity = 5\n\n[output]\nformat = \"json\"\n");
    let mut out = Vec::new();
    runner.run_script("insert kiwi\nsize\nclear\n", &mut out).unwrap();

    let values: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["op"], "insert");
    assert_eq!(values[0]["key"], "kiwi");
    assert_eq!(values[0]["size"], 1);
    assert!(values[0]["rejected"].is_null());
    assert_eq!(values[1], serde_json::json!({"op": "size", "size": 1}));
    assert_eq!(values[2], serde_json::json!({"op": "clear"}));
}

#[test]
fn test_bad_script_runs_nothing() {
    let (_dir, mut runner) = load_runner("[table]\ncapacity = 5\n");
    let mut out = Vec::new();

    let result = runner.run_script("insert a\nexplode\n", &mut out);
    assert!(matches!(result, Err(PukaError::Script(_))));
    assert!(out.is_empty());
    assert!(runner.table().is_empty());
}

#[test]
fn test_interactive_skips_bad_lines() {
    let (_dir, mut runner) = load_runner("[output]\nformat = \"text\"\n");
    let input = Cursor::new("insert a\nfind\nfind a\n");
    let mut out = Vec::new();

    assert_eq!(runner.run_interactive(input, &mut out).unwrap(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("error: "));
    assert!(text.lines().nth(2).unwrap().starts_with("find a: found"));
}

#[test]
fn test_execute_returns_outcomes() {
    let (_dir, mut runner) = load_runner("[table]\ncapacity = 11\nseed = 3\n");
    let commands = puka_cuckoo_lib::script::parse_script("insert a\nsize\n").unwrap();

    let outcomes: Vec<Outcome> = commands.iter().map(|c| runner.execute(c)).collect();
    assert!(matches!(outcomes[0], Outcome::Insert { size: 1, .. }));
    assert_eq!(outcomes[1], Outcome::Size { size: 1 });
    assert_eq!(runner.table().capacity(), 11);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
