//! Compose command implementation.
//!
//! Assembles the build descriptor and hands it to the bundler as JSON, either
//! on stdout or in a file.

use std::fs;

use rig_config::{compose, BuildEnv, BuildTrigger};

use crate::cli::ComposeArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

pub fn execute(args: ComposeArgs) -> Result<()> {
    let env = BuildEnv::capture()?;
    let manifest = utils::load_manifest(&args.root, args.manifest.as_ref())?;
    let trigger = BuildTrigger::from_signal(args.context.as_deref(), args.serve);

    let descriptor = compose(&args.root, &env, &manifest, trigger)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&descriptor)?
    } else {
        serde_json::to_string(&descriptor)?
    };

    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            ui::success(&format!("Descriptor written to {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
