//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use dualpack_config::ConfigError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path or create the file first",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, surfacing hints as help text
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid project config: {}", message),
        ConfigError::InvalidValue {
            field,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid value for '{}'", field),
        ConfigError::NotFound(path) => miette::miette!(
            help = "Drop --config to fall back to dualpack.toml or built-in defaults",
            "Config file not found: {}",
            path.display()
        ),
        ConfigError::AppModuleNotFound { path } => miette::miette!(
            help = "Set source_root and app_module in dualpack.toml",
            "App module not found: {}",
            path.display()
        ),
        ConfigError::TemplateNotFound { path } => miette::miette!(
            help = "Set html_template in dualpack.toml",
            "HTML template not found: {}",
            path.display()
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
