//! Project input loading for CLI commands.
//!
//! Priority: CLI flags > `DUALPACK_*` environment > `dualpack.toml` > defaults

use std::path::{Path, PathBuf};

use dualpack_config::{ConfigError, ProjectInputs};
use figment::providers::Serialized;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result, ResultExt};

/// Resolve the project root from `--cwd`, falling back to the process
/// working directory.
pub fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    match &args.cwd {
        Some(dir) => {
            let dir = if dir.is_absolute() {
                dir.clone()
            } else {
                std::env::current_dir()
                    .with_hint("Pass an absolute --cwd")?
                    .join(dir)
            };
            if !dir.exists() {
                return Err(CliError::FileNotFound(dir));
            }
            if !dir.is_dir() {
                return Err(CliError::InvalidArgument(format!(
                    "--cwd must name a directory: {}",
                    dir.display()
                )));
            }
            Ok(dir)
        }
        None => std::env::current_dir().with_hint("Pass --cwd to name the project root"),
    }
}

/// Load the project inputs with the CLI overrides merged on top.
pub fn load_inputs(args: &ProjectArgs) -> Result<(PathBuf, ProjectInputs)> {
    let root = project_root(args)?;
    let inputs = load_inputs_from(&root, args)?;
    Ok((root, inputs))
}

/// Same as [`load_inputs`] with an already resolved root.
pub fn load_inputs_from(root: &Path, args: &ProjectArgs) -> Result<ProjectInputs> {
    let mut figment = ProjectInputs::figment(root, args.config.as_deref())?;

    if let Some(port) = args.port {
        figment = figment.merge(Serialized::default("dev_port", port));
    }
    if let Some(out_dir) = &args.out_dir {
        figment = figment.merge(Serialized::default("output_dir", out_dir));
    }

    let inputs = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: Some(format!("Check dualpack.toml syntax and field types: {e}")),
    })?;

    tracing::debug!(root = %root.display(), "loaded project inputs");
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn cli_port_beats_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("dualpack.toml"), "dev_port = 3000\n").unwrap();

        let args = ProjectArgs {
            port: Some(4000),
            ..Default::default()
        };
        let inputs = load_inputs_from(dir.path(), &args).unwrap();
        assert_eq!(inputs.dev_port, 4000);
    }

    #[test]
    #[serial]
    fn config_file_used_without_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("dualpack.toml"), "output_dir = \"dist\"\n").unwrap();

        let inputs = load_inputs_from(dir.path(), &ProjectArgs::default()).unwrap();
        assert_eq!(inputs.output_dir, PathBuf::from("dist"));
        assert_eq!(inputs.dev_port, 8090);
    }

    #[test]
    #[serial]
    fn out_dir_override() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            out_dir: Some(PathBuf::from("public")),
            ..Default::default()
        };
        let inputs = load_inputs_from(dir.path(), &args).unwrap();
        assert_eq!(inputs.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn missing_cwd_is_reported() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            cwd: Some(dir.path().join("nope")),
            ..Default::default()
        };
        assert!(matches!(project_root(&args), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn file_as_cwd_is_invalid_argument() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("dualpack.toml");
        std::fs::write(&file, "").unwrap();

        let args = ProjectArgs {
            cwd: Some(file),
            ..Default::default()
        };
        assert!(matches!(
            project_root(&args),
            Err(CliError::InvalidArgument(msg)) if msg.contains("--cwd")
        ));
    }

    #[test]
    #[serial]
    fn malformed_file_is_invalid_value() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("dualpack.toml"), "dev_port = \"soon\"\n").unwrap();

        let err = load_inputs_from(dir.path(), &ProjectArgs::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidValue { .. })
        ));
    }
}
