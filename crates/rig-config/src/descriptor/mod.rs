//! The configuration fragment schema and its merge semantics.
//!
//! Fragments are partial, structurally nested records; the base fragment and
//! every overlay share this one shape. Merging is total over well-formed
//! fragments and follows three rules, applied recursively per field:
//!
//! - array-valued fields concatenate, base entries first, no de-duplication;
//! - scalar fields are right-biased: the overlay wins where both define the
//!   key, the base survives where the overlay omits it;
//! - nested sections recurse with the same rules.

mod plugin;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use plugin::PluginRequest;
pub use types::{InjectPosition, SourceMapMode};

use crate::dev::DevServerOptions;

/// A partial build configuration.
///
/// The composed descriptor handed to the bundler is itself a fragment: the
/// result of folding the base with the overlay chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFragment {
    /// Named entry points.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolveOptions>,

    /// Source-map mode for the whole build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleOptions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,

    /// Fields outside the fixed schema. They merge with the same rules and
    /// must be allowlisted by the validator to survive composition.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Output directory and file naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Naming template for entry bundles, e.g. `[name].js`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Naming template for non-entry chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,
}

/// Module resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Recognized source-file extensions, tried in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Root lookup directories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<PathBuf>,

    /// Directory names searched for dependencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules_dirs: Vec<String>,
}

/// Loader rules and parse exclusions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<LoaderRule>,

    /// Pre-bundled code the module analyzer must never re-parse.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub no_parse: Vec<String>,
}

/// Maps file patterns to a processing pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// File patterns this rule applies to.
    pub test: Vec<String>,

    /// Opaque pipeline specifier, resolved by the bundler.
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl ConfigFragment {
    /// Merge an overlay onto this fragment, consuming both.
    ///
    /// See the module docs for the exact rules. Merging is associative over
    /// array fields and right-biased over scalars; it has no failure mode.
    #[must_use]
    pub fn merge(mut self, overlay: ConfigFragment) -> ConfigFragment {
        for (name, path) in overlay.entry {
            self.entry.insert(name, path);
        }
        self.output = merge_section(self.output, overlay.output, OutputOptions::merge);
        self.resolve = merge_section(self.resolve, overlay.resolve, ResolveOptions::merge);
        if overlay.devtool.is_some() {
            self.devtool = overlay.devtool;
        }
        self.module = merge_section(self.module, overlay.module, ModuleOptions::merge);
        self.plugins.extend(overlay.plugins);
        self.dev_server = merge_section(self.dev_server, overlay.dev_server, DevServerOptions::merge);

        for (key, value) in overlay.extra {
            match self.extra.get_mut(&key) {
                Some(existing) => merge_values(existing, &value),
                None => {
                    self.extra.insert(key, value);
                }
            }
        }
        self
    }
}

impl OutputOptions {
    fn merge(self, overlay: Self) -> Self {
        Self {
            path: overlay.path.or(self.path),
            filename: overlay.filename.or(self.filename),
            chunk_filename: overlay.chunk_filename.or(self.chunk_filename),
        }
    }
}

impl ResolveOptions {
    fn merge(mut self, overlay: Self) -> Self {
        self.extensions.extend(overlay.extensions);
        self.roots.extend(overlay.roots);
        self.modules_dirs.extend(overlay.modules_dirs);
        self
    }
}

impl ModuleOptions {
    fn merge(mut self, overlay: Self) -> Self {
        self.rules.extend(overlay.rules);
        self.no_parse.extend(overlay.no_parse);
        self
    }
}

fn merge_section<T>(base: Option<T>, overlay: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, overlay) {
        (Some(base), Some(overlay)) => Some(merge(base, overlay)),
        (base, None) => base,
        (None, overlay) => overlay,
    }
}

/// Merge untyped values with the fragment rules: objects recurse, arrays
/// concatenate, scalars are replaced by the update.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (Value::Array(target_items), Value::Array(update_items)) => {
            target_items.extend(update_items.iter().cloned());
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
