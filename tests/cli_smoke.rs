#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests run the binary against a fixture list with translation
//! disabled, so no backend is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/awesome.md");

#[allow(deprecated)]
fn awesome_export(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("awesome-export").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

fn offline_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("awesome-export.toml"),
        "[translate]\nenabled = false\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_help_displays_usage() {
    let dir = TempDir::new().unwrap();
    awesome_export(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("awesome list"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_version_displays_version() {
    let dir = TempDir::new().unwrap();
    awesome_export(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_input_fails() {
    let dir = offline_workspace();

    awesome_export(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"))
        .stderr(predicate::str::contains("awesome-sysadmin.md"));

    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    awesome_export(dir.path())
        .args(["--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_offline_export_writes_json() {
    let dir = offline_workspace();
    fs::write(dir.path().join("awesome-sysadmin.md"), FIXTURE).unwrap();

    awesome_export(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 5 items exported -> data.json"));

    let raw = fs::read_to_string(dir.path().join("data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["title"], "Awesome Sysadmin");
    let categories = value["categories"].as_array().unwrap();
    let titles: Vec<_> = categories.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Contents", "Backups", "Monitoring", "License"]);
    assert_eq!(
        value["aboutLinks"],
        serde_json::json!([{ "text": "contributing guide", "url": "CONTRIBUTING.md" }])
    );

    for category in categories {
        for sub in category["subcategories"].as_array().unwrap() {
            for item in sub["items"].as_array().unwrap() {
                assert_eq!(item["description_fr"], item["description_en"]);
            }
        }
    }

    // Disabled translation never populates the cache.
    let cache = fs::read_to_string(dir.path().join(".translate_cache.json")).unwrap();
    assert_eq!(cache.trim(), "{}");
}

#[test]
fn test_quiet_suppresses_status() {
    let dir = offline_workspace();
    fs::write(dir.path().join("awesome-sysadmin.md"), FIXTURE).unwrap();

    awesome_export(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("items exported"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_paths_are_honored() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("lists")).unwrap();
    fs::write(dir.path().join("lists/selfhosted.md"), FIXTURE).unwrap();
    fs::write(
        dir.path().join("export.toml"),
        r#"
[export]
input = "lists/selfhosted.md"
output = "public/data.json"
cache = "cache/translations.json"

[translate]
enabled = false
"#,
    )
    .unwrap();

    awesome_export(dir.path())
        .args(["--config", "export.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-> public/data.json"));

    assert!(dir.path().join("public/data.json").exists());
    assert!(dir.path().join("cache/translations.json").exists());
}

#[test]
fn test_piped_summary_has_no_color_codes() {
    let dir = offline_workspace();
    fs::write(dir.path().join("awesome-sysadmin.md"), FIXTURE).unwrap();

    awesome_export(dir.path())
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout("OK: 5 items exported -> data.json\n");
}
