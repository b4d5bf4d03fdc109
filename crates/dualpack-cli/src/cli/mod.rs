//! Command-line interface definition for dualpack.
//!
//! # Command Structure
//!
//! - `dualpack describe` - Derive the build descriptor and hand it off as JSON
//! - `dualpack check` - Derive, validate inputs on disk, print a summary
//! - `dualpack schema` - Print the JSON schema of `dualpack.toml`
//!
//! The build mode is a global flag: `-p`/`--production` anywhere on the
//! command line selects production, its absence development.

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, DescribeArgs, ProjectArgs};

/// dualpack - development and production build descriptors from one config
#[derive(Parser, Debug)]
#[command(
    name = "dualpack",
    version,
    about = "Derive development and production bundler pipelines from one project",
    long_about = "dualpack turns one project layout into the build descriptor an external\n\
                  bundler engine executes. Development output keeps stable names, injects\n\
                  styles and describes a live-reload server; production output is\n\
                  content-hashed, minified and extracts styles into a stylesheet."
)]
pub struct Cli {
    /// Build for production instead of development
    ///
    /// Switches to hashed file names, extracted styles, minification and
    /// drops the dev server from the descriptor.
    #[arg(short = 'p', long, global = true)]
    pub production: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
