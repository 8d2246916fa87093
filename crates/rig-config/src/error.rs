//! Error types for configuration assembly and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::Platform;
use crate::validation::FieldError;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mapping errors: raised before any fragment is built
    #[error("no theme registered for platform `{platform}`")]
    ThemeNotMapped { platform: Platform },

    // Manifest loading errors
    #[error("invalid dependency manifest {}: {hint}", .path.display())]
    InvalidManifest { path: PathBuf, hint: String },

    // Environment snapshot errors (bad selector token, unparsable port, ...)
    #[error("invalid environment value: {field}: {hint}")]
    InvalidEnvValue { field: String, hint: String },

    // Schema validation errors: the composed descriptor is never returned
    #[error("schema validation failed: {}", summarize(.errors))]
    SchemaValidation { errors: Vec<FieldError> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validation_names_every_field() {
        let err = ConfigError::SchemaValidation {
            errors: vec![
                FieldError::new("output", "output section is required"),
                FieldError::new("entry", "at least one entry point is required"),
            ],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("output: output section is required"));
        assert!(rendered.contains("entry: at least one entry point is required"));
    }
}
