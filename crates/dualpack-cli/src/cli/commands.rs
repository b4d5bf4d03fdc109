use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available dualpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the build descriptor and emit it as JSON
    ///
    /// The JSON document is the complete handoff to the bundler engine:
    /// entries, output naming, loader rules, cache groups, minification,
    /// plugins and (in development) the dev server.
    Describe(DescribeArgs),

    /// Validate the project and summarize the derived pipeline
    ///
    /// Checks dualpack.toml values, confirms the app module and HTML template
    /// exist, then prints one line per pipeline component.
    Check(CheckArgs),

    /// Print the JSON schema for dualpack.toml
    Schema,
}

/// Where the project lives and how to override its inputs.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file, relative to the project root
    ///
    /// Defaults to dualpack.toml when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the development server port
    #[arg(long, value_name = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Override the output directory
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the descriptor to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only run value checks, skip filesystem checks
    #[arg(long)]
    pub schema_only: bool,
}
