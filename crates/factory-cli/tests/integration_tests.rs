//! Integration tests for the `factory` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn factory() -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("factory");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn workspace_json(out: &Path, libs: &[&str], components: &[&str], exports: &str) -> String {
    serde_json::json!({
        "path": out,
        "packages": [{
            "name": "ui-kit",
            "main": "src/index.ts",
            "types": "src/index.ts",
            "libs": libs,
            "components": components,
            "componentExports": exports,
        }]
    })
    .to_string()
}

fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_flag() {
    factory()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TypeScript"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    factory()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_from_json() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(
        &temp,
        "ws.json",
        &workspace_json(&out, &["local-storage"], &["button"], "named"),
    );

    factory()
        .args(["generate", "--yes"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 package(s)"));

    assert!(out.join("packages/ui-kit/src/lib/lib-1/index.ts").is_file());
    assert!(out.join("packages/ui-kit/src/components/component-1").is_dir());
    assert_eq!(
        fs::read_to_string(out.join("packages/main/src/deps.ts")).unwrap(),
        "export * as uiKit from '@internal/ui-kit';\n"
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("packages/main/package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["dependencies"]["@internal/ui-kit"], "0.0.0");

    let index = fs::read_to_string(out.join("packages/main/src/index.ts")).unwrap();
    assert!(index.contains("deps.uiKit.Component1({})"));
}

#[test]
fn test_generate_from_toml_with_path_override() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("elsewhere");
    let config = write_config(
        &temp,
        "ws.toml",
        r#"
path = "ignored"

[[packages]]
name = "foo"
main = "src/index.ts"
types = "src/index.ts"
libs = []
components = []
componentExports = "default"
"#,
    );

    factory()
        .args(["generate", "--yes", "--path"])
        .arg(&out)
        .arg(&config)
        .assert()
        .success();

    assert!(out.join("packages/foo/package.json").is_file());
    assert!(!temp.path().join("ignored").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(
        &temp,
        "ws.json",
        &workspace_json(&out, &["memory-storage"], &[], "default"),
    );

    factory()
        .args(["generate", "--dry-run"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("ts-lib-memory-storage"));

    assert!(!out.exists());
}

#[test]
fn test_dry_run_json_output() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(&temp, "ws.json", &workspace_json(&out, &[], &[], "default"));

    let assert = factory()
        .args(["--output-format", "json", "generate", "--dry-run"])
        .arg(&config)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert!(report["steps"].as_array().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_unknown_library_is_not_found() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(
        &temp,
        "ws.json",
        &workspace_json(&out, &["nonexistent"], &[], "default"),
    );

    factory()
        .args(["generate", "--yes"])
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ts-lib-nonexistent"));

    assert!(!out.exists());
}

#[test]
fn test_invalid_export_mode_is_user_error() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(&temp, "ws.json", &workspace_json(&out, &[], &[], "both"));

    factory()
        .args(["generate", "--yes"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid workspace config"));
}

#[test]
fn test_package_without_components_is_rejected() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = write_config(
        &temp,
        "ws.json",
        &serde_json::json!({
            "path": out,
            "packages": [{
                "name": "ui-kit",
                "main": "src/index.ts",
                "types": "src/index.ts",
                "libs": [],
                "componentExports": "default",
            }]
        })
        .to_string(),
    );

    factory()
        .args(["generate", "--yes"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing field `components`"));

    assert!(!out.exists());
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    factory()
        .arg("generate")
        .arg(temp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_non_empty_target_needs_confirmation() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("keep.txt"), "precious").unwrap();
    let config = write_config(&temp, "ws.json", &workspace_json(&out, &[], &[], "default"));

    // No terminal to prompt on, so the run must refuse.
    factory()
        .arg("generate")
        .arg(&config)
        .assert()
        .failure();
    assert!(out.join("keep.txt").exists());

    factory()
        .args(["generate", "--yes"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacing existing contents"));
    assert!(!out.join("keep.txt").exists());
}

#[test]
fn test_quiet_does_not_imply_yes() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("keep.txt"), "precious").unwrap();
    let config = write_config(&temp, "ws.json", &workspace_json(&out, &[], &[], "default"));

    factory()
        .args(["--quiet", "generate"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    assert!(out.join("keep.txt").exists());

    factory()
        .args(["--quiet", "generate", "--yes"])
        .arg(&config)
        .assert()
        .success();
    assert!(!out.join("keep.txt").exists());
}

#[test]
fn test_templates_list() {
    factory()
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ts-project"))
        .stdout(predicate::str::contains("ts-lib-local-storage"))
        .stdout(predicate::str::contains("ts-component-card"));
}

#[test]
fn test_templates_from_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("ts-lib-custom")).unwrap();
    fs::write(temp.path().join("ts-lib-custom/index.ts"), "export {};\n").unwrap();

    factory()
        .args(["templates", "--format", "json", "--templates"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ts-lib-custom\""))
        .stdout(predicate::str::contains("\"library\""));
}

#[test]
fn test_config_get() {
    factory()
        .args(["config", "get", "output.format"])
        .env("FACTORY_OUTPUT__FORMAT", "plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = plain"));
}

#[test]
fn test_completions_bash() {
    factory()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("factory"));
}

#[test]
fn test_unknown_subcommand_exits_2() {
    factory().arg("frobnicate").assert().code(2);
}
