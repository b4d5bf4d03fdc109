//! Pluggable project validation strategies
//!
//! Separates value checks (safe anywhere) from filesystem checks (CLI use).
//! Neither is needed to derive a descriptor: the engine reports missing
//! inputs itself. These exist so `dualpack check` can report them earlier.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::project::ProjectInputs;

/// Trait for pluggable validation strategies
pub trait ConfigValidator {
    fn validate(&self, inputs: &ProjectInputs) -> Result<()>;
}

/// Value-level validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use dualpack_config::{ConfigValidator, ProjectInputs, SchemaValidator};
///
/// SchemaValidator.validate(&ProjectInputs::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, inputs: &ProjectInputs) -> Result<()> {
        if inputs.app_module.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "app_module cannot be empty".to_string(),
                hint: Some("Point app_module at the project file, e.g. \"app.fsproj\"".to_string()),
            });
        }

        if inputs.polyfill.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "polyfill cannot be empty".to_string(),
                hint: Some("Use \"@babel/polyfill\" unless you ship another one".to_string()),
            });
        }

        if inputs.dev_port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev_port must be a fixed, non-zero port".to_string(),
                hint: Some("The reload channel needs a predictable address".to_string()),
            });
        }

        if !inputs.stylesheet.ends_with(".css") || inputs.stylesheet.contains('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "stylesheet '{}' must be a bare file name ending in .css",
                    inputs.stylesheet
                ),
                hint: Some("The stylesheet is written directly into output_dir".to_string()),
            });
        }

        if inputs.runtime_marker.is_empty() || inputs.vendor_marker.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "cache group markers cannot be empty".to_string(),
                hint: Some("An empty marker would claim every module".to_string()),
            });
        }

        // vendors excludes the runtime marker, so a vendor marker containing
        // it can never match.
        if inputs.vendor_marker.contains(&inputs.runtime_marker) {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "vendor_marker '{}' contains runtime_marker '{}'",
                    inputs.vendor_marker, inputs.runtime_marker
                ),
                hint: Some(
                    "Every third-party module would land in the framework-runtime group; \
                     pick a runtime_marker that is not part of vendor_marker"
                        .to_string(),
                ),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that the app module and HTML
/// template exist under `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, inputs: &ProjectInputs) -> Result<()> {
        SchemaValidator.validate(inputs)?;

        let app = self.root.join(&inputs.source_root).join(&inputs.app_module);
        if !app.exists() {
            return Err(ConfigError::AppModuleNotFound { path: app });
        }

        let template = self.root.join(inputs.template_path());
        if !template.exists() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        Ok(())
    }
}

/// Convenience function for value-only validation
pub fn validate_schema(inputs: &ProjectInputs) -> Result<()> {
    SchemaValidator.validate(inputs)
}

/// Convenience function for filesystem validation
pub fn validate_fs(inputs: &ProjectInputs, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(inputs)
}
