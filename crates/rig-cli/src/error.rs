//! Error handling for the Rig CLI.

use std::path::PathBuf;

use rig_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration assembly or validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CliError to a miette Report for terminal rendering.
///
/// Schema violations get one line per offending field path; everything else
/// renders through its Display impl.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(ConfigError::SchemaValidation { errors }) => {
            let detail = errors
                .iter()
                .map(|e| format!("  {e}"))
                .collect::<Vec<_>>()
                .join("\n");
            miette::miette!("Schema validation failed:\n{detail}")
        }
        CliError::Config(e @ ConfigError::ThemeNotMapped { .. }) => {
            miette::miette!("Platform mapping error: {e}")
        }
        _ => miette::miette!("{err}"),
    }
}
