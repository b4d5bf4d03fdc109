//! Tests for layered project config loading.

use dualpack_config::{BuildDescriptor, BuildMode, ConfigError, ProjectInputs};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let inputs = ProjectInputs::load(dir.path(), None).expect("load");
    assert_eq!(inputs, ProjectInputs::default());
}

#[test]
#[serial]
fn toml_overrides_defaults() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("dualpack.toml"),
        r#"
source_root = "client"
app_module = "Client.fsproj"
output_dir = "public"
dev_port = 8080
"#,
    )
    .expect("write config");

    let inputs = ProjectInputs::load(dir.path(), None).expect("load");
    assert_eq!(inputs.app_module_specifier(), "./client/Client.fsproj");
    assert_eq!(inputs.output_dir, PathBuf::from("public"));
    assert_eq!(inputs.dev_port, 8080);
    assert_eq!(inputs.polyfill, "@babel/polyfill");

    let descriptor = BuildDescriptor::derive(BuildMode::Development, &inputs).expect("derive");
    assert_eq!(
        descriptor.entries.get("app").unwrap(),
        ["@babel/polyfill", "./client/Client.fsproj"]
    );
    assert_eq!(descriptor.dev_server.unwrap().port, 8080);
}

#[test]
#[serial]
fn explicit_config_path_must_exist() {
    let dir = TempDir::new().expect("tempdir");
    let err = ProjectInputs::load(dir.path(), Some(Path::new("custom.toml"))).unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, dir.path().join("custom.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn explicit_config_path_is_used() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("custom.toml"), "stylesheet = \"app.css\"\n").expect("write");

    let inputs =
        ProjectInputs::load(dir.path(), Some(Path::new("custom.toml"))).expect("load");
    assert_eq!(inputs.stylesheet, "app.css");
}

#[test]
#[serial]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("dualpack.toml"), "entry = \"main.js\"\n").expect("write");

    let err = ProjectInputs::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("dualpack.toml"), "dev_port = 8080\n").expect("write");

    unsafe {
        std::env::set_var("DUALPACK_DEV_PORT", "9100");
    }
    let result = ProjectInputs::load(dir.path(), None);
    unsafe {
        std::env::remove_var("DUALPACK_DEV_PORT");
    }

    assert_eq!(result.expect("load").dev_port, 9100);
}

#[test]
#[serial]
fn unrelated_prefixed_variables_are_ignored() {
    let dir = TempDir::new().expect("tempdir");

    unsafe {
        std::env::set_var("DUALPACK_ENTRY", "main.js");
    }
    let result = ProjectInputs::load(dir.path(), None);
    unsafe {
        std::env::remove_var("DUALPACK_ENTRY");
    }

    assert_eq!(result.expect("load"), ProjectInputs::default());
}

#[test]
#[serial]
fn mistyped_environment_value_is_invalid() {
    let dir = TempDir::new().expect("tempdir");

    unsafe {
        std::env::set_var("DUALPACK_DEV_PORT", "soon");
    }
    let result = ProjectInputs::load(dir.path(), None);
    unsafe {
        std::env::remove_var("DUALPACK_DEV_PORT");
    }

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "configuration"
    ));
}
