use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn codebundle(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("codebundle").unwrap();
    cmd.current_dir(dir.path()).env_remove("CODEBUNDLE_ROOT");
    cmd
}

fn sample_root() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().unwrap();
    tmp.child("a.py").write_str("x=1\n\ny=2\n").unwrap();
    tmp.child("b.cs").write_str("int x;\n").unwrap();
    tmp
}

#[test]
fn bundles_selected_language() {
    let root = sample_root();

    codebundle(&root)
        .args(["bundle", "--output", "out.txt", "--language", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle created"));

    root.child("out.txt").assert("x=1\n\ny=2\n\n");
}

#[test]
fn short_flags_and_legacy_remove_empty_lines() {
    let root = sample_root();

    codebundle(&root)
        .args(["-q", "bundle", "-o", "out.txt", "-l", "all", "-s", "type", "-n", "-re", "-a", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    root.child("out.txt")
        .assert("// Author: Ada\n// Source: b.cs\nint x;\n\n// Source: a.py\nx=1\ny=2\n\n");
}

#[test]
fn comma_separated_languages_and_explicit_root() {
    let root = sample_root();
    let cwd = assert_fs::TempDir::new().unwrap();

    codebundle(&cwd)
        .arg("bundle")
        .arg("--root")
        .arg(root.path())
        .args(["-o", "out.txt", "-l", "c#,python"])
        .assert()
        .success();

    cwd.child("out.txt").assert("x=1\n\ny=2\n\nint x;\n\n");
    root.child("out.txt").assert(predicate::path::missing());
}

#[test]
fn refuses_to_overwrite_existing_output() {
    let root = sample_root();
    root.child("existing.txt").write_str("keep").unwrap();

    codebundle(&root)
        .args(["-q", "bundle", "-o", "existing.txt", "-l", "all"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    root.child("existing.txt").assert("keep");
}

#[test]
fn missing_language_is_a_usage_error() {
    let root = sample_root();

    codebundle(&root)
        .args(["bundle", "-o", "out.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--language"));

    root.child("out.txt").assert(predicate::path::missing());
}

#[test]
fn quiet_still_reports_failures() {
    let cwd = assert_fs::TempDir::new().unwrap();

    codebundle(&cwd)
        .args(["-q", "bundle", "--root", "no_such_dir", "-o", "out.txt", "-l", "python"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("no_such_dir")));

    cwd.child("out.txt").assert(predicate::path::missing());
}

#[test]
fn config_file_supplies_defaults() {
    let root = sample_root();
    root.child(".codebundle.toml")
        .write_str("[bundle]\nsort = \"type\"\nnote = true\n")
        .unwrap();

    codebundle(&root)
        .args(["bundle", "-o", "out.txt", "-l", "all"])
        .assert()
        .success();
    root.child("out.txt")
        .assert(predicate::str::starts_with("// Source: b.cs\n"));

    codebundle(&root)
        .args(["bundle", "--no-config", "-o", "plain.txt", "-l", "all"])
        .assert()
        .success();
    root.child("plain.txt")
        .assert("x=1\n\ny=2\n\nint x;\n\n");
}

#[test]
fn create_rsp_then_replay() {
    let root = sample_root();

    codebundle(&root)
        .arg("create-rsp")
        .write_stdin("out.txt\npython, c#\nY\ntype\nN\nAda Lovelace\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Response file saved"));

    let rsp = fs::read_to_string(root.path().join("bundle.rsp")).unwrap();
    assert_eq!(
        rsp.trim_end(),
        "bundle --output out.txt --language python --language c# --note --sort type --author \"Ada Lovelace\""
    );

    codebundle(&root).arg("@bundle.rsp").assert().success();
    root.child("out.txt").assert(
        "// Author: Ada Lovelace\n// Source: b.cs\nint x;\n\n// Source: a.py\nx=1\n\ny=2\n\n",
    );
}

#[test]
fn create_rsp_rejects_invalid_sort() {
    let root = sample_root();

    codebundle(&root)
        .arg("create-rsp")
        .write_stdin("out.txt\npython\nN\nsize\nN\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort option"));

    root.child("bundle.rsp").assert(predicate::path::missing());
}

#[test]
fn create_rsp_rejects_existing_output() {
    let root = sample_root();

    codebundle(&root)
        .arg("create-rsp")
        .write_stdin("a.py\npython\nN\nname\nN\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
