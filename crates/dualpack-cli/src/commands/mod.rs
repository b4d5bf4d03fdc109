//! Command implementations for the dualpack CLI.
//!
//! - [`describe`] - Derive the build descriptor and emit it as JSON
//! - [`check`] - Validate the project and summarize the pipeline
//! - [`schema`] - Print the JSON schema of `dualpack.toml`
//!
//! Each command provides an `execute` function taking the parsed arguments
//! and the resolved build mode.

pub mod check;
pub mod describe;
pub mod schema;

pub use check::execute as check_execute;
pub use describe::execute as describe_execute;
pub use schema::execute as schema_execute;
