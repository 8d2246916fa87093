//! Check command implementation.
//!
//! Assembles and validates the descriptor without emitting it.

use rig_config::{compose, BuildEnv, BuildTrigger, ConfigError};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking build configuration...");

    let env = BuildEnv::capture()?;
    let manifest = utils::load_manifest(&args.root, args.manifest.as_ref())?;
    let trigger = BuildTrigger::from_signal(args.context.as_deref(), args.serve);

    match compose(&args.root, &env, &manifest, trigger) {
        Ok(descriptor) => {
            let rules = descriptor
                .module
                .as_ref()
                .map(|m| m.rules.len())
                .unwrap_or(0);
            ui::success(&format!(
                "Configuration is valid ({} plugins, {} loader rules)",
                descriptor.plugins.len(),
                rules
            ));
            Ok(())
        }
        Err(ConfigError::SchemaValidation { errors }) => {
            for field_error in &errors {
                ui::error(&field_error.to_string());
            }
            Err(CliError::Config(ConfigError::SchemaValidation { errors }))
        }
        Err(other) => Err(other.into()),
    }
}
