//! Integration tests for the server-env binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn server_env() -> Command {
    let mut cmd = Command::new(cargo_bin("server-env"));
    cmd.env_remove("SERVER_ENV_ROOT")
        .env_remove("SERVER_ENV_DOTENV")
        .env_remove("SERVER_ENV_APACHE_FILE")
        .env_remove("APP_ENV")
        .env_remove("LOCAL_APP_ENV")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("server environment"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_resolves_development() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .assert()
        .success()
        .stdout(predicate::str::contains("code: 0"))
        .stdout(predicate::str::contains("Desenvolvimento"));
    Ok(())
}

#[test]
fn cli_resolve_reads_variable() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("APP_ENV", "2")
        .args(["resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("2\n");
    Ok(())
}

#[test]
fn cli_resolve_prefers_valid_override() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("APP_ENV", "2")
        .env("LOCAL_APP_ENV", "1")
        .args(["resolve", "APP_ENV"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Homologação"))
        .stdout(predicate::str::contains("override LOCAL_APP_ENV"));
    Ok(())
}

#[test]
fn cli_resolve_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = server_env()
        .env("APP_ENV", "3")
        .args(["resolve", "APP_ENV", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["code"], 3);
    assert_eq!(value["name"], "Espelho");
    Ok(())
}

#[test]
fn cli_resolve_is_sets_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("APP_ENV", "2")
        .args(["resolve", "APP_ENV", "--is", "production"])
        .assert()
        .success();

    server_env()
        .env("APP_ENV", "2")
        .args(["resolve", "APP_ENV", "--is", "staging"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_resolve_in_sets_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("APP_ENV", "0")
        .args(["resolve", "APP_ENV", "--in", "0,2"])
        .assert()
        .success();

    server_env()
        .env("APP_ENV", "4")
        .args(["resolve", "APP_ENV", "--in", "development,production"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_get_prefers_override() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("LOCAL_A_B", "1")
        .env("A_B", "2")
        .args(["get", "A", "B"])
        .assert()
        .success()
        .stdout("1\n");
    Ok(())
}

#[test]
fn cli_get_missing_fails() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .args(["get", "SERVER_ENV_CLI_SURELY_UNSET"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_check_valid_and_invalid() -> Result<(), Box<dyn std::error::Error>> {
    server_env().args(["check", "4"]).assert().success();
    server_env().args(["check", "5"]).assert().code(1);
    server_env().args(["check", "-1"]).assert().code(1);
    Ok(())
}

#[test]
fn cli_list_shows_table() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Desenvolvimento"))
        .stdout(predicate::str::contains("Teste"));
    Ok(())
}

#[test]
fn cli_loads_dot_env_from_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env.local"), "APP_ENV=3\n")?;

    server_env()
        .env("APP_ENV", "1")
        .args(["--root"])
        .arg(temp.path())
        .args(["--dotenv", ".env.local", "resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("3\n");
    Ok(())
}

#[test]
fn cli_root_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env"), "APP_ENV=4\n")?;

    server_env()
        .env("SERVER_ENV_ROOT", temp.path())
        .args(["resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("4\n");
    Ok(())
}

#[test]
fn cli_loads_apache_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let apache = temp.path().join("vhost.conf");
    fs::write(&apache, "SetEnv APP_ENV 2\n")?;

    server_env()
        .arg("--apache-env-file")
        .arg(&apache)
        .args(["resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("2\n");
    Ok(())
}

#[test]
fn cli_missing_apache_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .args(["--apache-env-file", "/nonexistent/server-env/vhost.conf", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Env file not found"));
    Ok(())
}

#[test]
fn cli_malformed_apache_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let apache = temp.path().join("vhost.conf");
    fs::write(&apache, "SetEnv APP_A=B 1\n")?;

    server_env()
        .arg("--apache-env-file")
        .arg(&apache)
        .args(["resolve", "APP_ENV"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid variable name"));
    Ok(())
}

#[test]
fn cli_dot_env_inline_comments_and_references() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".env"),
        "PROD=2 # production\nAPP_ENV=${PROD}\n",
    )?;

    server_env()
        .arg("--root")
        .arg(temp.path())
        .args(["resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("2\n");
    Ok(())
}

#[test]
fn cli_no_bootstrap_ignores_env_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env"), "APP_ENV=4\n")?;

    server_env()
        .env("APP_ENV", "1")
        .arg("--root")
        .arg(temp.path())
        .args(["--no-bootstrap", "resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("1\n");
    Ok(())
}

#[test]
fn cli_custom_separator() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .env("LOCAL__APP_ENV", "3")
        .env("APP_ENV", "1")
        .args(["--separator", "__", "resolve", "APP_ENV", "--quiet"])
        .assert()
        .success()
        .stdout("3\n");
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    server_env()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server-env"));
    Ok(())
}
