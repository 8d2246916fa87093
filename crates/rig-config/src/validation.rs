//! Pluggable descriptor validation.
//!
//! The validator is the single gate between configuration assembly and the
//! bundler: a descriptor that fails here is never handed out.

use std::fmt;

use crate::descriptor::{ConfigFragment, PluginRequest};

/// One schema violation, anchored to the offending field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Trait for pluggable descriptor validation strategies.
pub trait ConfigValidator {
    /// Check a composed descriptor, collecting every violation.
    fn validate(&self, descriptor: &ConfigFragment) -> Result<(), Vec<FieldError>>;
}

/// Structural validation against the fixed descriptor schema.
///
/// Fields outside the schema land in the fragment's `extra` map and are
/// rejected unless allowlisted; the `style` section is permitted by default.
///
/// # Example
///
/// ```
/// use rig_config::{ConfigValidator, SchemaValidator};
/// use rig_config::descriptor::ConfigFragment;
///
/// let validator = SchemaValidator::default().with_extra_field("telemetry");
/// let errors = validator.validate(&ConfigFragment::default()).unwrap_err();
/// assert!(errors.iter().any(|e| e.path == "entry"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    allowed_extras: Vec<String>,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self {
            allowed_extras: vec!["style".to_string()],
        }
    }
}

impl SchemaValidator {
    /// Permit an additional top-level field without validating its contents.
    pub fn with_extra_field(mut self, name: impl Into<String>) -> Self {
        self.allowed_extras.push(name.into());
        self
    }
}

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &ConfigFragment) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if descriptor.entry.is_empty() {
            errors.push(FieldError::new(
                "entry",
                "at least one entry point is required",
            ));
        }

        match &descriptor.output {
            None => errors.push(FieldError::new("output", "output section is required")),
            Some(output) => {
                if output.path.is_none() {
                    errors.push(FieldError::new(
                        "output.path",
                        "output directory is required",
                    ));
                }
                match output.filename.as_deref() {
                    None => errors.push(FieldError::new(
                        "output.filename",
                        "filename template is required",
                    )),
                    Some(filename) if !filename.contains("[name]") => {
                        errors.push(FieldError::new(
                            "output.filename",
                            "filename template must contain [name]",
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        if let Some(module) = &descriptor.module {
            for (index, rule) in module.rules.iter().enumerate() {
                if rule.test.is_empty() {
                    errors.push(FieldError::new(
                        format!("module.rules[{index}].test"),
                        "rule needs at least one file pattern",
                    ));
                }
                if rule.loader.is_empty() {
                    errors.push(FieldError::new(
                        format!("module.rules[{index}].loader"),
                        "rule needs a loader pipeline",
                    ));
                }
            }
        }

        for (index, plugin) in descriptor.plugins.iter().enumerate() {
            if let PluginRequest::ExtractBundle { name, entries } = plugin {
                if name.is_empty() {
                    errors.push(FieldError::new(
                        format!("plugins[{index}].name"),
                        "bundle name cannot be empty",
                    ));
                }
                if entries.iter().any(|e| e.trim().is_empty()) {
                    errors.push(FieldError::new(
                        format!("plugins[{index}].entries"),
                        "bundle entry names cannot be empty",
                    ));
                }
            }
        }

        if let Some(server) = &descriptor.dev_server {
            if server.host.as_deref().is_some_and(str::is_empty) {
                errors.push(FieldError::new("dev_server.host", "host cannot be empty"));
            }
            if server.port.is_none() {
                errors.push(FieldError::new("dev_server.port", "port is required"));
            }
        }

        for key in descriptor.extra.keys() {
            if !self.allowed_extras.iter().any(|allowed| allowed == key) {
                errors.push(FieldError::new(
                    key.clone(),
                    "unrecognized configuration field",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
