use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::types::InjectPosition;

/// A request for the bundler to activate one of its plugins.
///
/// Requests are pure data; the implementations live in the bundler. The
/// variants cover the fixed base set plus everything the overlay branches can
/// add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginRequest {
    /// Type-check sources out of band so compilation never waits on it.
    TypeCheck,

    /// Inject build-time constants as compile-time-resolved literals.
    ///
    /// Values are already JSON-encoded; the bundler substitutes them verbatim.
    DefineConstants { values: IndexMap<String, String> },

    /// Generate the HTML document from a template, injecting script tags.
    HtmlTemplate {
        template: PathBuf,
        #[serde(default)]
        inject: InjectPosition,
    },

    /// Emit source maps for everything not matching `exclude`.
    SourceMaps {
        filename: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exclude: Option<String>,
    },

    /// Skip asset emission entirely when any error occurred.
    SuppressErrorOutput,

    /// Remove duplicate modules from the output.
    DedupeModules,

    /// Clean the output directory before writing.
    CleanOutputDir { dir: PathBuf },

    /// Split the named modules into a separate bundle.
    ExtractBundle { name: String, entries: Vec<String> },

    /// Extract compiled styles into a standalone file.
    ExtractStyles { entry: PathBuf },

    /// Set up incremental style compilation without extraction.
    SetupStyles { entry: PathBuf },
}
