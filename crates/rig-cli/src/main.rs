//! Rig CLI - build-configuration assembly for the hybrid-app bundler.
//!
//! Parses command-line arguments, initializes logging, and dispatches to the
//! `compose` and `check` commands.

use clap::Parser;
use miette::Result;
use rig_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Compose(compose_args) => commands::compose_execute(compose_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}
