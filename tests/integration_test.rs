use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn run_ok_program() -> Result<()> {
    let mut cmd = Command::cargo_bin("progrun")?;
    cmd.arg("true")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"exit-code="0""#))
        .stdout(predicate::str::contains("<arg>true</arg>"))
        .stdout(predicate::str::contains("<error>").not());
    Ok(())
}

#[test]
fn run_fail_program() -> Result<()> {
    let mut cmd = Command::cargo_bin("progrun")?;
    cmd.args(&["sh", "-c", "echo bad apple >&2; exit 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-zero exit code 1 from:"))
        .stderr(predicate::str::contains("bad apple"));
    Ok(())
}

#[test]
fn run_fail_program_error_ok() -> Result<()> {
    let mut cmd = Command::cargo_bin("progrun")?;
    cmd.args(&["--error-ok", "sh", "-c", "exit 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"exit-code="1""#))
        .stdout(predicate::str::contains("<error>Non-zero exit code 1"));
    Ok(())
}

#[test]
fn run_missing_program() -> Result<()> {
    let mut cmd = Command::cargo_bin("progrun")?;
    cmd.args(&["--error-ok", "/nonexistent/progrun-missing-binary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run program"));
    Ok(())
}

#[test]
fn write_result_to_file() -> Result<()> {
    let target = std::env::temp_dir().join(format!("progrun-{}.xml", std::process::id()));
    let mut cmd = Command::cargo_bin("progrun")?;
    cmd.arg("-o")
        .arg(&target)
        .args(&["sh", "-c", "echo '  hello  '"])
        .assert()
        .success();
    let written = std::fs::read_to_string(&target)?;
    std::fs::remove_file(&target)?;
    assert!(written.contains("<stdout>hello</stdout>"));
    Ok(())
}
