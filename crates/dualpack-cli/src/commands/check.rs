//! Check command implementation.
//!
//! Validates the project without handing anything to the bundler.

use dualpack_config::{
    validate_fs, validate_schema, BuildDescriptor, BuildMode, CONFIG_FILE_NAME,
};

use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load dualpack.toml, environment and CLI overrides
/// 2. Check values (ports, markers, stylesheet name)
/// 3. Check the app module and HTML template exist (unless `--schema-only`)
/// 4. Derive the descriptor and print one line per component
pub fn execute(args: CheckArgs, mode: BuildMode) -> Result<()> {
    ui::info("Checking project...");

    let (root, inputs) = config::load_inputs(&args.project)?;
    if args.project.config.is_none() && !root.join(CONFIG_FILE_NAME).exists() {
        ui::warning(&format!("No {CONFIG_FILE_NAME} found, using defaults"));
    }

    let validation = if args.schema_only {
        validate_schema(&inputs)
    } else {
        validate_fs(&inputs, &root)
    };
    if let Err(err) = validation {
        ui::error("Project check failed");
        return Err(err.into());
    }
    if !args.schema_only {
        ui::success(&format!("  {} exists", inputs.app_module_specifier()));
        ui::success(&format!("  {} exists", inputs.template_path().display()));
    }
    ui::success("Configuration is valid!");

    let descriptor = BuildDescriptor::derive(mode, &inputs)?;
    ui::print_descriptor_summary(&descriptor);

    Ok(())
}
