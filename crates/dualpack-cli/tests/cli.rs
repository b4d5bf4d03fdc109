//! End-to-end tests for the dualpack binary and command implementations.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use dualpack_cli::cli::{CheckArgs, DescribeArgs, ProjectArgs};
use dualpack_cli::commands::{check, describe};
use dualpack_cli::CliError;
use dualpack_config::{BuildMode, ConfigError};
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

fn scaffold(root: &Path) {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("app.fsproj"), "<Project />").unwrap();
    fs::write(src.join("index.html"), "<!doctype html><div id=\"root\"></div>").unwrap();
}

fn dualpack() -> Command {
    let mut cmd = Command::cargo_bin("dualpack").unwrap();
    cmd.env_remove("DUALPACK_DEV_PORT")
        .env_remove("DUALPACK_OUTPUT_DIR")
        .env("NO_COLOR", "1");
    cmd
}

fn describe_to_file(project: &Path, mode: BuildMode) -> serde_json::Value {
    let out = project.join("descriptor.json");
    let args = DescribeArgs {
        project: ProjectArgs {
            cwd: Some(project.to_path_buf()),
            ..Default::default()
        },
        out: Some(out.clone()),
    };
    describe::execute(args, mode).unwrap();
    serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap()
}

#[test]
fn describe_development_to_stdout() {
    let temp = TempDir::new().unwrap();

    dualpack()
        .args(["describe", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"development\""))
        .stdout(predicate::str::contains("\"app\""))
        .stdout(predicate::str::contains("\"devServer\""))
        .stdout(predicate::str::contains("{name}.js"));
}

#[test]
fn describe_production_flag_after_subcommand() {
    let temp = TempDir::new().unwrap();

    dualpack()
        .args(["describe", "-p", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"demo\""))
        .stdout(predicate::str::contains("{name}.{contentHash}.js"))
        .stdout(predicate::str::contains("devServer").not());
}

#[test]
#[serial]
fn describe_writes_out_file() {
    let temp = TempDir::new().unwrap();

    let dev = describe_to_file(temp.path(), BuildMode::Development);
    assert_eq!(dev["entries"]["app"][0], "@babel/polyfill");
    assert_eq!(dev["entries"]["app"][1], "./src/app.fsproj");
    assert_eq!(dev["devServer"]["port"], 8090);
    assert_eq!(dev["optimization"]["minimize"], false);

    let prod = describe_to_file(temp.path(), BuildMode::Production);
    assert!(prod["entries"]["demo"].is_array());
    assert!(prod.get("devServer").is_none());
    assert_eq!(prod["optimization"]["minimize"], true);
    assert_eq!(prod["plugins"][0]["kind"], "extract-styles");
    assert_eq!(prod["plugins"][1]["kind"], "emit-html");
}

#[test]
#[serial]
fn describe_port_flag_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dualpack.toml"), "dev_port = 3000\n").unwrap();

    dualpack()
        .args(["describe", "--port", "4321", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4321"));
}

#[test]
#[serial]
fn describe_rejects_zero_port_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dualpack.toml"), "dev_port = 0\n").unwrap();
    let out = temp.path().join("descriptor.json");

    let args = DescribeArgs {
        project: ProjectArgs {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        },
        out: Some(out.clone()),
    };
    let err = describe::execute(args, BuildMode::Development).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::SchemaValidation { .. })
    ));
    assert!(!out.exists());
}

#[test]
#[serial]
fn describe_rejects_empty_polyfill() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dualpack.toml"), "polyfill = \"\"\n").unwrap();

    dualpack()
        .args(["describe", "-p", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("polyfill"));
}

#[test]
fn check_passes_on_scaffolded_project() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    dualpack()
        .args(["check", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid!"))
        .stderr(predicate::str::contains("dev server"));
}

#[test]
fn check_fails_without_app_module() {
    let temp = TempDir::new().unwrap();

    dualpack()
        .args(["check", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.fsproj"));
}

#[test]
fn check_reports_missing_template() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());
    fs::remove_file(temp.path().join("src/index.html")).unwrap();

    let args = CheckArgs {
        project: ProjectArgs {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        },
        schema_only: false,
    };
    let err = check::execute(args, BuildMode::Production).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::TemplateNotFound { .. })
    ));
}

#[test]
fn check_schema_only_skips_filesystem() {
    let temp = TempDir::new().unwrap();

    let args = CheckArgs {
        project: ProjectArgs {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        },
        schema_only: true,
    };
    check::execute(args, BuildMode::Development).unwrap();
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    dualpack()
        .args(["describe", "--config", "custom.toml", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom.toml"));
}

#[test]
fn schema_lists_project_fields() {
    dualpack()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev_port"))
        .stdout(predicate::str::contains("runtime_marker"));
}
