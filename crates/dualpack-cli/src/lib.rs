//! dualpack CLI - development and production build descriptors from one project.
//!
//! The binary is a thin shell over `dualpack-config`:
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `describe`, `check` and `schema`
//! - [`config`] - Project input loading with CLI overrides
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output
//!
//! ```rust
//! use dualpack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, true, true);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
