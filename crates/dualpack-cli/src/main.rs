//! dualpack CLI entry point: argument parsing, logging setup and dispatch.

use clap::Parser;
use dualpack_cli::{cli, commands, error, logger, ui};
use dualpack_config::BuildMode;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let mode = BuildMode::from_flag(args.production);

    let result = match args.command {
        cli::Command::Describe(describe_args) => commands::describe_execute(describe_args, mode),
        cli::Command::Check(check_args) => commands::check_execute(check_args, mode),
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
