//! Tests that drive the compiled emoji-catalog binary

mod common;

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn emoji_catalog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_emoji-catalog"))
}

#[test]
fn test_build_command_writes_catalogs() {
    let workspace = TempDir::new().unwrap();
    let release = workspace.path().join("cldr-release-46");
    common::create_release(&release);

    fs::write(
        workspace.path().join("emoji-catalog.yaml"),
        "languages:\n  - en\n  - de\nworkers: 1\n",
    )
    .unwrap();

    let output = emoji_catalog()
        .current_dir(workspace.path())
        .args(["build", "--cldr", ".", "--output", "out", "--release", "46"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out = workspace.path().join("out");
    assert!(out.join("en.json").is_file());
    assert!(out.join("de.json").is_file());
    assert!(!out.join("ja.json").exists());
    assert_eq!(fs::read_to_string(out.join("cldr_version.txt")).unwrap(), "46\n");

    let global: Value =
        serde_json::from_str(&fs::read_to_string(out.join("global.json")).unwrap()).unwrap();
    assert_eq!(global["😀"]["shortcodes"][0], ":grinning_face:");
}

#[test]
fn test_build_command_fails_without_release() {
    let workspace = TempDir::new().unwrap();

    let output = emoji_catalog()
        .current_dir(workspace.path())
        .args(["build", "--cldr", "missing"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!workspace.path().join("emoji_data").exists());
}

#[test]
fn test_languages_command_json() {
    let output = emoji_catalog()
        .args(["languages", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let table: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["en"], "en.json");
    assert_eq!(table["zh_Hant"], "zh_TW.json");
    assert_eq!(table.as_object().unwrap().len(), 71);
}

#[test]
fn test_languages_command_rejects_unknown_format() {
    let output = emoji_catalog()
        .args(["languages", "--format", "xml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
