//! Logging infrastructure for the Rig CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity flags and
//! `RUST_LOG` overrides.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for rig crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for rig crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rig=debug,rig_config=debug,rig_cli=debug")
    } else if quiet {
        EnvFilter::new("rig=error,rig_config=error,rig_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rig=info,rig_config=info,rig_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr) // keep stdout clean for the descriptor
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
