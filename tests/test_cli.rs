//! CLI integration tests for orphan-docs.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;

/// Command isolated from any user-level config file.
fn orphan_docs_cmd(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("orphan-docs");
    cmd.current_dir(cwd).env("XDG_CONFIG_HOME", cwd.join(".config"));
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// docs/a.md (no links), docs/b.md -> a.md, docs/sub/c.md (no links).
fn basic_docs(root: &Path) {
    write(root, "docs/a.md", "# A\n");
    write(root, "docs/b.md", "See (a.md) for details\n");
    write(root, "docs/sub/c.md", "# C\n");
}

#[test]
fn test_cli_help() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no other page links to"));
}

#[test]
fn test_cli_default_root_is_docs() {
    let tmp = tempfile::TempDir::new().unwrap();
    basic_docs(tmp.path());

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All distinct markdown files: 3"))
        .stdout(predicate::str::contains("Referenced markdown files: 1"))
        .stdout(predicate::str::contains("Unreferenced markdown files: 2"))
        .stdout(predicate::str::contains(" - b.md"))
        .stdout(predicate::str::contains(" - c.md"))
        .stdout(predicate::str::contains(" - a.md").not());
}

#[test]
fn test_cli_explicit_root() {
    let tmp = tempfile::TempDir::new().unwrap();
    write(tmp.path(), "pages/index.md", "- [Intro](intro/start.md)\n");
    write(tmp.path(), "pages/intro/start.md", "# Start\n");

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.arg("pages");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Unreferenced markdown files: 1"))
        .stdout(predicate::str::contains(" - index.md"));
}

#[test]
fn test_cli_missing_root_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.arg("does-not-exist");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("root directory not found"));
}

#[test]
fn test_cli_common_dir_excluded_by_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    write(tmp.path(), "docs/a.md", "# A\n");
    write(tmp.path(), "docs/common/nav.md", "home: (../a.md)\n");

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All distinct markdown files: 1"))
        .stdout(predicate::str::contains("Unreferenced markdown files: 0"));
}

#[test]
fn test_cli_config_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    write(tmp.path(), "site/a.md", "# A\n");
    write(tmp.path(), "site/b.md", "see [a.md]\n");
    write(
        tmp.path(),
        "orphan-docs.toml",
        "root = \"site\"\nopen_marker = \"[\"\nclose_marker = \"]\"\n",
    );

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Unreferenced markdown files: 1"))
        .stdout(predicate::str::contains(" - b.md"));
}

#[test]
fn test_cli_bad_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    basic_docs(tmp.path());
    write(tmp.path(), "orphan-docs.toml", "open_marker = \"<<\"\n");

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("open_marker"));
}

#[test]
fn test_cli_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    basic_docs(tmp.path());

    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["counts"]["inventory"], 3);
    assert_eq!(value["references"], serde_json::json!(["a.md"]));
    assert_eq!(value["unreferenced"], serde_json::json!(["b.md", "c.md"]));
}

#[test]
fn test_cli_unknown_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut cmd = orphan_docs_cmd(tmp.path());
    cmd.arg("--nonexistent-flag");
    cmd.assert().failure();
}
