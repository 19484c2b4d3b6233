use assert_cmd::Command;
use predicates::prelude::*;

/// Help lists the stack attributes
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("runstack").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--param"))
        .stdout(predicate::str::contains("--capabilities"))
        .stdout(predicate::str::contains("--update-on-conflict"));
}

/// Version flag works
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("runstack").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("runstack"));
}

/// A missing template is rejected during validation, before any AWS call
#[test]
fn test_missing_template_is_rejected() {
    let mut cmd = Command::cargo_bin("runstack").unwrap();
    cmd.env_remove("RUNSTACK_NAME")
        .env_remove("RUNSTACK_TEMPLATE")
        .arg("--name")
        .arg("my-stack")
        .assert()
        .failure()
        .stderr(predicate::str::contains("template-path"));
}

/// A missing name is rejected once the template attribute is present
#[test]
fn test_missing_name_is_rejected() {
    let mut cmd = Command::cargo_bin("runstack").unwrap();
    cmd.env_remove("RUNSTACK_NAME")
        .env_remove("RUNSTACK_TEMPLATE")
        .arg("--template-body")
        .arg("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("name attribute"));
}

/// Malformed --param values are rejected by the parser
#[test]
fn test_malformed_param_is_rejected() {
    let mut cmd = Command::cargo_bin("runstack").unwrap();
    cmd.args(["--name", "my-stack", "--template-body", "{}"])
        .args(["--param", "NoEqualsSign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}
