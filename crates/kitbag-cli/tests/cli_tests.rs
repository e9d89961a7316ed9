//! Integration tests for kitbag-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use kitbag_core::keygen::literal;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn kitbag_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("kitbag");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_lines(path: &Path, count: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x;\n".repeat(count)).unwrap();
}

fn scenario_tree() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    write_lines(&temp.path().join("src/a.ext"), 3);
    write_lines(&temp.path().join("src/b.ext"), 5);
    write_lines(&temp.path().join("bin/c.ext"), 2);
    write_lines(&temp.path().join("src/notes.txt"), 10);
    temp
}

#[test]
fn test_version_flag() {
    kitbag_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kitbag"));
}

#[test]
fn test_help_flag() {
    kitbag_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("source-tree archiving"));
}

#[test]
fn test_archive_help() {
    kitbag_cmd()
        .arg("archive")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--compression-level"));
}

#[test]
fn test_keygen_prints_two_parseable_literals() {
    let output = kitbag_cmd().arg("keygen").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {stdout}");

    let decrypt = literal::parse_decrypt_map(lines[0]).unwrap();
    let encrypt = literal::parse_pair_set(lines[1]).unwrap();
    assert_eq!(decrypt.len(), 89);
    assert_eq!(encrypt.len(), 89);

    let keys: BTreeSet<char> = decrypt.iter().map(|&(e, _)| e).collect();
    let values: BTreeSet<char> = decrypt.iter().map(|&(_, p)| p).collect();
    assert_eq!(keys.len(), 89);
    assert_eq!(keys, values);

    let pairs: BTreeSet<(char, char)> = encrypt.into_iter().collect();
    assert!(decrypt.iter().all(|&(e, p)| pairs.contains(&(p, e))));
}

#[test]
fn test_keygen_runs_differ() {
    let first = kitbag_cmd().arg("keygen").output().unwrap().stdout;
    let second = kitbag_cmd().arg("keygen").output().unwrap().stdout;
    assert_ne!(first, second);
}

#[test]
fn test_keygen_seed_is_reproducible() {
    let run = || {
        kitbag_cmd()
            .args(["keygen", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_keygen_custom_alphabet() {
    kitbag_cmd()
        .args(["keygen", "--alphabet", "ab", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{'"))
        .stdout(predicate::str::contains("{{'"));
}

#[test]
fn test_keygen_rejects_duplicate_alphabet() {
    kitbag_cmd()
        .args(["keygen", "--alphabet", "aba"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate character 'a'"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_keygen_json_output() {
    let output = kitbag_cmd()
        .args(["--json", "keygen", "--seed", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "keygen");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["alphabet_size"], 89);
    assert_eq!(json["data"]["pairs"].as_array().unwrap().len(), 89);
}

#[test]
fn test_archive_scenario_output() {
    let source = scenario_tree();
    let out = TempDir::new().unwrap();

    kitbag_cmd()
        .arg("archive")
        .arg(source.path())
        .arg("--output-dir")
        .arg(out.path())
        .args(["--ext", ".ext", "-x", "bin", "--name", "snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory: "))
        .stdout(predicate::str::contains("-- File a.ext with 3 lines of code"))
        .stdout(predicate::str::contains("-- File b.ext with 5 lines of code"))
        .stdout(predicate::str::contains("c.ext").not())
        .stdout(predicate::str::contains("There are 8 lines in 2 files"));

    let archive =
        zip::ZipArchive::new(File::open(out.path().join("snapshot.zip")).unwrap()).unwrap();
    let names: BTreeSet<&str> = archive.file_names().collect();
    assert_eq!(names, BTreeSet::from(["src/a.ext", "src/b.ext"]));
}

#[test]
fn test_archive_directory_header_printed_once() {
    let source = scenario_tree();
    let out = TempDir::new().unwrap();

    let output = kitbag_cmd()
        .arg("archive")
        .arg(source.path())
        .arg("-o")
        .arg(out.path())
        .args(["-e", "ext", "-x", "bin"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Directory: ").count(), 1);
}

#[test]
fn test_archive_defaults_in_current_dir() {
    let temp = TempDir::new().unwrap();
    write_lines(&temp.path().join("Program.cs"), 4);
    write_lines(&temp.path().join("obj/Debug/Gen.cs"), 9);

    kitbag_cmd()
        .arg("archive")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 4 lines in 1 files"));

    assert!(temp.path().join("PoodleChanBD.zip").is_file());
}

#[test]
fn test_archive_empty_tree() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    kitbag_cmd()
        .arg("archive")
        .arg(source.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory:").not())
        .stdout(predicate::str::contains("There are 0 lines in 0 files"));

    let archive =
        zip::ZipArchive::new(File::open(out.path().join("PoodleChanBD.zip")).unwrap()).unwrap();
    assert_eq!(archive.len(), 0);
}

#[test]
fn test_archive_json_output() {
    let source = scenario_tree();
    let out = TempDir::new().unwrap();

    let output = kitbag_cmd()
        .arg("--json")
        .arg("archive")
        .arg(source.path())
        .arg("-o")
        .arg(out.path())
        .args(["-e", ".ext", "-x", "bin"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "archive");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["total_lines"], 8);
    assert_eq!(json["data"]["total_files"], 2);
    assert_eq!(json["data"]["files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_archive_quiet_suppresses_output() {
    let source = scenario_tree();
    let out = TempDir::new().unwrap();

    kitbag_cmd()
        .arg("--quiet")
        .arg("archive")
        .arg(source.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_archive_missing_source_fails() {
    let out = TempDir::new().unwrap();

    kitbag_cmd()
        .arg("archive")
        .arg(out.path().join("nope"))
        .arg("-o")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_archive_missing_source_json_error() {
    let out = TempDir::new().unwrap();

    let output = kitbag_cmd()
        .arg("--json")
        .arg("archive")
        .arg(out.path().join("nope"))
        .arg("-o")
        .arg(out.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "archive");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("does not exist"));
    assert!(json.get("data").is_none());
}

#[test]
fn test_keygen_bad_alphabet_json_error() {
    let output = kitbag_cmd()
        .args(["--json", "keygen", "--alphabet", "aa"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "keygen");
    assert_eq!(json["status"], "error");
}

#[test]
fn test_archive_rejects_empty_extension() {
    let temp = TempDir::new().unwrap();

    kitbag_cmd()
        .arg("archive")
        .arg(temp.path())
        .arg("-o")
        .arg(temp.path())
        .args(["--ext", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid extension"));
}

#[test]
fn test_archive_rejects_bad_compression_level() {
    kitbag_cmd()
        .args(["archive", "-l", "12"])
        .assert()
        .failure();
}

#[test]
fn test_pause_waits_for_enter() {
    kitbag_cmd()
        .args(["keygen", "--pause"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<Press Enter to Exit>"));
}

#[test]
fn test_completion_bash() {
    kitbag_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kitbag"));
}
