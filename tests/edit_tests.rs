//! Integration tests for weight, bracket, move, edit and delete commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::promptag_cmd;

fn write_prompt(temp: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp.path().join("prompt.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_weight_up_wraps_plain_tag() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat, dog");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--up"])
        .assert()
        .success()
        .stdout("<cat:1.1>\n");

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "<cat:1.1>,dog");
}

#[test]
fn test_weight_down_with_step() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "<cat:1.0>");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--down", "--step", "0.5"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "<cat:0.5>");
}

#[test]
fn test_weight_uses_configured_step() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");
    fs::write(temp.path().join("promptag.toml"), "weight_step = 0.3\n").unwrap();

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--up"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "<cat:1.3>");
}

#[test]
fn test_weight_set_clamps() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--set", "25"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "<cat:10.0>");
}

#[test]
fn test_weight_remove() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "<cat:1.3>, dog");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--remove"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat,dog");
}

#[test]
fn test_weight_requires_a_change() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0"])
        .assert()
        .failure();
}

#[test]
fn test_weight_step_above_limit_rejected() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--up", "--step", "25"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid weight_step: 25"))
        .stderr(predicate::str::contains("at most 20"));

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat");
}

#[test]
fn test_weight_step_conflicts_with_set() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--set", "1", "--step", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "0", "--remove", "--step", "0.5"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat");
}

#[test]
fn test_weight_on_newline_fails() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat\ndog");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "1", "--up"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("line break"));

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat\ndog");
}

#[test]
fn test_index_out_of_range_fails() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat, dog");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["weight", prompt.to_str().unwrap(), "7", "--up"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("0 to 1"));
}

#[test]
fn test_bracket_add_and_remove() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat, dog");
    let file = prompt.to_str().unwrap();

    promptag_cmd()
        .current_dir(temp.path())
        .args(["bracket", file, "1", "--round", "--add"])
        .assert()
        .success();
    promptag_cmd()
        .current_dir(temp.path())
        .args(["bracket", file, "1", "--square", "--add"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat,[(dog)]");

    // Round is not the outer layer, nothing happens
    promptag_cmd()
        .current_dir(temp.path())
        .args(["bracket", file, "1", "--round", "--remove"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat,[(dog)]");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["bracket", file, "1", "--square", "--remove"])
        .assert()
        .success()
        .stdout("(dog)\n");
    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat,(dog)");
}

#[test]
fn test_bracket_requires_kind() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["bracket", prompt.to_str().unwrap(), "0", "--add"])
        .assert()
        .failure();
}

#[test]
fn test_move_tag() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "a, b, c\nd");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["move", prompt.to_str().unwrap(), "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved tag 0 to 2"));

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "b,c,a\nd");
}

#[test]
fn test_move_onto_newline_fails() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "a, b\nc");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["move", prompt.to_str().unwrap(), "0", "2"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("line break"));

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "a, b\nc");
}

#[test]
fn test_edit_splits_on_commas() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "cat, bird");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["edit", prompt.to_str().unwrap(), "0", "cat, kitten"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced tag 0 with 2 tags"));

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "cat,kitten,bird");
}

#[test]
fn test_delete_newline() {
    let temp = TempDir::new().unwrap();
    let prompt = write_prompt(&temp, "a\nb");

    promptag_cmd()
        .current_dir(temp.path())
        .args(["delete", prompt.to_str().unwrap(), "1"])
        .assert()
        .success()
        .stdout("Removed ↵\n");

    assert_eq!(fs::read_to_string(&prompt).unwrap(), "a,b");
}
