//! The composition pipeline.
//!
//! Runs the whole decision procedure once, synchronously: resolve paths,
//! select vendors, build the base fragment, resolve overlays, fold, validate.
//! Everything is a pure function of the inputs, so re-running with the same
//! snapshot is idempotent.

use std::path::Path;

use crate::base::base_fragment;
use crate::descriptor::ConfigFragment;
use crate::env::BuildEnv;
use crate::error::{ConfigError, Result};
use crate::manifest::DependencyManifest;
use crate::overlay::{resolve_overlays, BuildTrigger};
use crate::paths::{ProjectPaths, ThemeRegistry};
use crate::validation::{ConfigValidator, SchemaValidator};
use crate::vendor::vendor_entries;

/// Compose and validate the build descriptor with the default theme registry
/// and schema validator.
pub fn compose(
    root: impl AsRef<Path>,
    env: &BuildEnv,
    manifest: &DependencyManifest,
    trigger: BuildTrigger,
) -> Result<ConfigFragment> {
    compose_with(
        root,
        env,
        manifest,
        trigger,
        &ThemeRegistry::default(),
        &SchemaValidator::default(),
    )
}

/// Compose and validate the build descriptor.
///
/// Overlays apply left-to-right on top of the base fragment, in the order the
/// overlay resolver produced them. The descriptor is returned only if the
/// validator accepts it.
///
/// # Errors
///
/// [`ConfigError::ThemeNotMapped`] if the platform has no theme, and
/// [`ConfigError::SchemaValidation`] if the composed descriptor violates the
/// schema. There is no partial-failure mode in between.
pub fn compose_with(
    root: impl AsRef<Path>,
    env: &BuildEnv,
    manifest: &DependencyManifest,
    trigger: BuildTrigger,
    themes: &ThemeRegistry,
    validator: &dyn ConfigValidator,
) -> Result<ConfigFragment> {
    let paths = ProjectPaths::resolve(root, env.platform, themes)?;
    let vendors = vendor_entries(manifest);

    let base = base_fragment(&paths, env);
    let overlays = resolve_overlays(trigger, &paths, vendors, env);
    let descriptor = overlays.into_iter().fold(base, ConfigFragment::merge);

    validator
        .validate(&descriptor)
        .map_err(|errors| ConfigError::SchemaValidation { errors })?;

    tracing::info!(
        ?trigger,
        platform = %env.platform,
        plugins = descriptor.plugins.len(),
        "composed build descriptor"
    );
    Ok(descriptor)
}
