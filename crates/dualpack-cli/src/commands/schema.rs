//! Schema command implementation.

use std::io::Write;

use dualpack_config::ProjectInputs;

use crate::error::Result;

/// Print the JSON schema of `dualpack.toml` to stdout.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&ProjectInputs::json_schema())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{schema}")?;
    Ok(())
}
