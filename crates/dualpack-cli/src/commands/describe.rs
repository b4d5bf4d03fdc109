//! Describe command implementation.
//!
//! Derives the descriptor for the selected mode and hands it off as JSON,
//! on stdout or into the file given by `--out`.

use std::io::Write;

use dualpack_config::{validate_schema, BuildDescriptor, BuildMode};

use crate::cli::DescribeArgs;
use crate::config;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the describe command.
///
/// # Errors
///
/// Fails when the project inputs cannot be loaded, fail value checks
/// (zero port, empty polyfill), or the output file cannot be written.
pub fn execute(args: DescribeArgs, mode: BuildMode) -> Result<()> {
    let (root, inputs) = config::load_inputs(&args.project)?;
    validate_schema(&inputs)?;
    let descriptor = BuildDescriptor::derive(mode, &inputs)?;
    let json = descriptor
        .to_json_pretty()
        .context("Failed to serialize build descriptor")?;

    match args.out {
        Some(out) => {
            let path = if out.is_absolute() { out } else { root.join(out) };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_path(parent)?;
            }
            std::fs::write(&path, format!("{json}\n")).with_path(&path)?;
            ui::success(&format!("Wrote {} descriptor to {}", mode, path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
