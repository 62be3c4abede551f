//! Integration tests for the `modsplit` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SOURCE: &str = "\
mod test;

use test::Tile;

fn helper(x: i32) -> i32 {
    if x > 0 {
        x
    } else {
        -x
    }
}

fn main() {
    println!(\"{}\", helper(-3));
}
";

const CONFIG: &str = r#"
[source]
path = "src/main.rs"
anchor = "mod test;"
backup_suffix = ".backup"

[imports]
global = ["use crate::test::Tile;"]

[[modules]]
name = "utils"
functions = ["helper", "does_not_exist"]
"#;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), SOURCE).unwrap();
    fs::write(dir.path().join("modsplit.toml"), CONFIG).unwrap();
    dir
}

fn modsplit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modsplit").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_split_writes_module_and_rewrites_source() {
    let dir = project();

    modsplit(dir.path())
        .arg("split")
        .assert()
        .success()
        .stdout(predicate::str::contains("Split complete!"))
        .stdout(predicate::str::contains("does_not_exist not found"))
        .stdout(predicate::str::contains("cargo check"));

    let module = fs::read_to_string(dir.path().join("src/utils.rs")).unwrap();
    assert!(module.starts_with("// utils.rs - Module for utils\n\n"));
    assert!(module.contains("use crate::test::Tile;"));
    assert!(module.contains("fn helper(x: i32) -> i32 {"));

    let source = fs::read_to_string(dir.path().join("src/main.rs")).unwrap();
    assert!(source.starts_with("mod test;\n\nmod utils;\n\nuse utils::*;\n"));
    assert!(!source.contains("fn helper"));
    assert!(source.contains("fn main()"));

    let backup = fs::read_to_string(dir.path().join("src/main.rs.backup")).unwrap();
    assert_eq!(backup, SOURCE);
}

#[test]
fn test_split_missing_source_is_fatal() {
    let dir = project();

    modsplit(dir.path())
        .args(["split", "--source", "src/nope.rs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Source file not found"));

    assert!(!dir.path().join("src/nope.rs.backup").exists());
}

#[test]
fn test_split_dry_run_changes_nothing() {
    let dir = project();

    modsplit(dir.path())
        .args(["split", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("(planned)"));

    assert!(!dir.path().join("src/utils.rs").exists());
    assert!(!dir.path().join("src/main.rs.backup").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/main.rs")).unwrap(),
        SOURCE
    );
}

#[test]
fn test_split_json_report() {
    let dir = project();

    let output = modsplit(dir.path())
        .args(["split", "--format", "json", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dryRun"], true);
    assert_eq!(report["modules"][0]["name"], "utils");
    assert_eq!(report["modules"][0]["outcomes"][0]["status"], "extracted");
    assert_eq!(report["modules"][0]["outcomes"][1]["status"], "not_found");
}

#[test]
fn test_split_failed_module_write_exits_with_one() {
    let dir = project();
    fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    modsplit(dir.path())
        .args(["split", "--output-dir", "blocker/out"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Split finished with errors"));

    // Source is left alone when a module could not be written
    assert_eq!(
        fs::read_to_string(dir.path().join("src/main.rs")).unwrap(),
        SOURCE
    );
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = project();

    modsplit(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    modsplit(dir.path())
        .args(["init", "--path", "custom.toml"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("custom.toml")).unwrap();
    assert!(written.contains("[source]"));
    assert!(written.contains("name = \"mcts\""));
}

#[test]
fn test_plan_summary_lists_modules() {
    let dir = project();

    modsplit(dir.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("utils"))
        .stdout(predicate::str::contains("2 functions"));
}
