//! Command-line interface definition for the Rig configuration assembler.
//!
//! # Command Structure
//!
//! - `rig compose` - Assemble, validate, and emit the build descriptor
//! - `rig check` - Assemble and validate without emitting

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Rig - build-configuration assembly for the hybrid-app bundler
#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Assemble and validate bundler configuration",
    long_about = "Rig composes a base build configuration with environment- and\n\
                  platform-specific overlays, validates the merged descriptor against\n\
                  a schema, and hands it to the bundler as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build descriptor and emit it as JSON
    Compose(ComposeArgs),

    /// Assemble and validate the descriptor without emitting it
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Invocation-context signal; "build" and "stats" select the production
    /// branch, anything else (or nothing) selects development
    #[arg(long)]
    pub context: Option<String>,

    /// Compose for the interactive dev server (merges host/port settings)
    #[arg(long)]
    pub serve: bool,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Dependency manifest path (defaults to <root>/package.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Write the descriptor to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the descriptor JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Invocation-context signal to validate against
    #[arg(long)]
    pub context: Option<String>,

    /// Validate the dev-server shape of the descriptor
    #[arg(long)]
    pub serve: bool,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Dependency manifest path (defaults to <root>/package.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}
