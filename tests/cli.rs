use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_resolve_prints_contained_path() -> Result<()> {
    let dir = tempdir()?;

    Command::cargo_bin("pathguard")?
        .arg("resolve")
        .arg("--base")
        .arg(dir.path())
        .arg("nested")
        .arg("file.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("nested/file.txt").or(predicate::str::contains("nested\\file.txt")));

    Ok(())
}

#[test]
fn test_resolve_rejects_traversal() -> Result<()> {
    let dir = tempdir()?;

    Command::cargo_bin("pathguard")?
        .arg("resolve")
        .arg("--base")
        .arg(dir.path())
        .arg("../secrets.txt")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path traversal detected"));

    Ok(())
}

#[test]
fn test_ext_uses_default_allowlist() -> Result<()> {
    Command::cargo_bin("pathguard")?
        .arg("ext")
        .arg("UPPER.PDF")
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed"));

    Command::cargo_bin("pathguard")?
        .arg("ext")
        .arg("archive.zip")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("denied"));

    Ok(())
}

#[test]
fn test_ext_with_custom_allowlist() -> Result<()> {
    Command::cargo_bin("pathguard")?
        .arg("ext")
        .arg("archive.zip")
        .arg("--allow")
        .arg("zip")
        .assert()
        .success();

    Ok(())
}

#[test]
fn test_ensure_dirs_is_idempotent() -> Result<()> {
    let dir = tempdir()?;

    for _ in 0..2 {
        Command::cargo_bin("pathguard")?
            .arg("ensure-dirs")
            .arg("--base")
            .arg(dir.path())
            .arg("uploads")
            .arg("exports")
            .assert()
            .success();
    }

    assert!(dir.path().join("uploads").is_dir());
    assert!(dir.path().join("exports").is_dir());

    Ok(())
}

#[test]
fn test_ensure_dirs_rejects_traversal() -> Result<()> {
    let dir = tempdir()?;

    Command::cargo_bin("pathguard")?
        .arg("ensure-dirs")
        .arg("--base")
        .arg(dir.path())
        .arg("../outside")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path traversal detected"));

    assert!(!dir.path().parent().unwrap().join("outside").exists());

    Ok(())
}

#[test]
fn test_schema_command() -> Result<()> {
    Command::cargo_bin("pathguard")?
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("$schema"));

    Ok(())
}
