//! Integration tests for vger-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use vger_core::DigestAlgorithm;
use vger_core::digest::hash_bytes;
use vger_core::test_utils::NestedZipBuilder;
use vger_core::test_utils::create_test_zip;

fn vger_cmd() -> Command {
    cargo_bin_cmd!("vger")
}

fn write(dir: &Path, name: &str, data: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("failed to write fixture");
    path
}

/// Writes `foo.zip` and a letter listing its digest.
fn flat_fixture(temp: &TempDir) -> (PathBuf, PathBuf, String) {
    let bytes = create_test_zip(&[("Mail/All mail.mbox", b"From: someone")]);
    let digest = hash_bytes(DigestAlgorithm::Sha512, &bytes);
    let archive = write(temp.path(), "foo.zip", &bytes);
    let (head, tail) = digest.split_at(64);
    let letter = write(
        temp.path(),
        "letter.txt",
        format!("Produced files:\nSHA512- foo.zip:\n{head}\n{tail}\n"),
    );
    (archive, letter, digest)
}

#[test]
fn test_version_flag() {
    vger_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vger"));
}

#[test]
fn test_help_flag() {
    vger_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("digest"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_verify_flat_match() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (archive, letter, digest) = flat_fixture(&temp);

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Verifier for Google Electronic Returns (VGER)",
        ))
        .stdout(predicate::str::contains(format!("foo.zip:{digest}:match")))
        .stdout(predicate::str::contains("1 hash match(es) verified."))
        .stdout(predicate::str::contains(
            "0 hash mismatch(es) or error(s) detected.",
        ));

    let report = fs::read_to_string(temp.path().join("foo.zip.txt")).unwrap();
    assert!(report.contains(&format!("foo.zip:{digest}:match")));
}

#[test]
fn test_verify_nested_mismatch_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let builder = NestedZipBuilder::new()
        .add_nested("a.zip", &[("Drive/a.txt", b"first")])
        .add_nested("b.zip", &[("Drive/b.txt", b"second")]);
    let a_digest = hash_bytes(DigestAlgorithm::Sha512, builder.member_bytes(0));
    let archive = write(temp.path(), "outer.zip", builder.build());
    let letter = write(
        temp.path(),
        "letter.txt",
        format!("SHA512-a.zip:{a_digest}\nSHA512-b.zip:{}\n", "0".repeat(128)),
    );

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .assert()
        .failure()
        .stdout(predicate::str::contains(":mismatch or error"))
        .stdout(predicate::str::contains("1 hash match(es) verified."))
        .stdout(predicate::str::contains(
            "1 hash mismatch(es) or error(s) detected.",
        ));

    assert!(temp.path().join("outer.zip.txt").exists());
}

#[test]
fn test_verify_missing_archive_reports_error() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let letter = write(temp.path(), "letter.txt", "SHA512-a.zip:00");
    let archive = temp.path().join("missing.zip");

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .assert()
        .failure()
        .stdout(predicate::str::contains("file not found"))
        .stdout(predicate::str::contains("An error occurred."))
        .stderr(predicate::str::contains("nothing was verified"))
        .stderr(predicate::str::contains("archive extraction failed").not());

    let report = fs::read_to_string(temp.path().join("missing.zip.txt")).unwrap();
    assert!(report.trim_end().ends_with("An error occurred."));
}

#[test]
fn test_verify_no_report() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (archive, letter, _) = flat_fixture(&temp);

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .arg("--no-report")
        .assert()
        .success();

    assert!(!temp.path().join("foo.zip.txt").exists());
}

#[test]
fn test_verify_prompts_for_paths() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (archive, letter, _) = flat_fixture(&temp);

    vger_cmd()
        .arg("verify")
        .write_stdin(format!(
            "\"{}\"\n\"{}\"\n",
            letter.display(),
            archive.display()
        ))
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the letter filename: "))
        .stderr(predicate::str::contains("Enter the archive filename: "))
        .stdout(predicate::str::contains("1 hash match(es) verified."));
}

#[test]
fn test_verify_custom_rules() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let bytes = create_test_zip(&[("x", b"x")]);
    let digest = hash_bytes(DigestAlgorithm::Sha512, &bytes);
    let archive = write(temp.path(), "foo.zip", &bytes);
    let (head, tail) = digest.split_at(40);
    let letter = write(
        temp.path(),
        "letter.txt",
        format!("SHA512-foo.zip:{head}\nPage 1 of 2\n{tail}"),
    );
    let rules = write(
        temp.path(),
        "rules.toml",
        "extra_boilerplate = [\"Page1of2\"]\n",
    );

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .arg("--no-report")
        .assert()
        .failure();

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .arg("--no-report")
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success();
}

#[test]
fn test_verify_invalid_rules_file() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (archive, letter, _) = flat_fixture(&temp);
    let rules = write(temp.path(), "rules.toml", "colour = \"red\"\n");

    vger_cmd()
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rules file"));
}

#[test]
fn test_verify_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (archive, letter, digest) = flat_fixture(&temp);

    let output = vger_cmd()
        .arg("--json")
        .arg("verify")
        .arg(&archive)
        .arg(&letter)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "verify");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["status"], "verified");
    assert_eq!(json["data"]["layout"], "flat");
    assert_eq!(json["data"]["records"][0]["digest"], digest.as_str());
}

#[test]
fn test_digest_nested() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let builder = NestedZipBuilder::new()
        .add_file("README.txt", b"not hashed")
        .add_nested("a.zip", &[("x", b"x")]);
    let digest = hash_bytes(DigestAlgorithm::Sha512, builder.member_bytes(0));
    let archive = write(temp.path(), "outer.zip", builder.build());

    vger_cmd()
        .arg("digest")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("a.zip:{digest}")))
        .stdout(predicate::str::contains("README.txt").not());
}

#[test]
fn test_digest_sha256() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let bytes = create_test_zip(&[("x", b"x")]);
    let digest = hash_bytes(DigestAlgorithm::Sha256, &bytes);
    let archive = write(temp.path(), "foo.zip", &bytes);

    vger_cmd()
        .arg("digest")
        .arg(&archive)
        .arg("--algorithm")
        .arg("sha256")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("foo.zip:{digest}")));
}

#[test]
fn test_digest_invalid_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write(temp.path(), "foo.zip", b"not a zip");

    vger_cmd()
        .arg("digest")
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid zip file"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_normalize_text_letter() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let letter = write(
        temp.path(),
        "letter.txt",
        "SHA512- a.zip:\r\nab cd\n\x0cSHA512-b.zip:ef\n",
    );

    vger_cmd()
        .arg("normalize")
        .arg(&letter)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.zip:abcdb.zip:ef"));
}

#[test]
fn test_normalize_missing_document() {
    let temp = TempDir::new().expect("failed to create temp dir");

    vger_cmd()
        .arg("normalize")
        .arg(temp.path().join("missing.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_completion_bash() {
    vger_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("vger"));
}
