//! Invocation-context resolution and overlay selection.

use serde::{Deserialize, Serialize};

use crate::descriptor::{ConfigFragment, OutputOptions, PluginRequest, SourceMapMode};
use crate::env::BuildEnv;
use crate::helpers;
use crate::paths::ProjectPaths;

/// Why configuration assembly was triggered.
///
/// The loosely-typed lifecycle signal is resolved into this closed set once,
/// at the boundary; composition logic never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTrigger {
    Production,
    Stats,
    Development,
    DevServer,
}

impl BuildTrigger {
    /// Resolve an invocation-context signal.
    ///
    /// `"build"` and `"stats"` select the release triggers; any other signal,
    /// including none, falls through to development. `interactive` marks a
    /// process running under the interactive dev server and only matters on
    /// the default path.
    pub fn from_signal(signal: Option<&str>, interactive: bool) -> Self {
        let trigger = match signal {
            Some("build") => BuildTrigger::Production,
            Some("stats") => BuildTrigger::Stats,
            _ if interactive => BuildTrigger::DevServer,
            _ => BuildTrigger::Development,
        };
        tracing::debug!(?signal, interactive, ?trigger, "resolved invocation context");
        trigger
    }

    /// Production and stats builds share the release overlay chain.
    pub fn is_release(self) -> bool {
        matches!(self, BuildTrigger::Production | BuildTrigger::Stats)
    }
}

/// Select the overlay fragments for a trigger, in application order.
pub fn resolve_overlays(
    trigger: BuildTrigger,
    paths: &ProjectPaths,
    vendors: Vec<String>,
    env: &BuildEnv,
) -> Vec<ConfigFragment> {
    if trigger.is_release() {
        tracing::debug!(?trigger, "selected release overlay branch");
        return release_overlays(paths, vendors);
    }

    tracing::debug!(?trigger, "selected development overlay branch");
    let mut overlays = development_overlays(paths, vendors);
    if trigger == BuildTrigger::DevServer {
        overlays.push(helpers::dev_server(env.host.clone(), env.port));
    }
    overlays
}

fn release_overlays(paths: &ProjectPaths, vendors: Vec<String>) -> Vec<ConfigFragment> {
    vec![
        ConfigFragment {
            output: Some(OutputOptions {
                path: Some(paths.www.clone()),
                filename: Some("[name].[chunkhash].js".to_string()),
                chunk_filename: Some("[chunkhash].js".to_string()),
            }),
            plugins: vec![
                PluginRequest::SuppressErrorOutput,
                PluginRequest::DedupeModules,
            ],
            ..ConfigFragment::default()
        },
        helpers::clean(&paths.www),
        helpers::extract_bundle("vendor", vendors),
        helpers::extract_styles(&paths.theme),
    ]
}

fn development_overlays(paths: &ProjectPaths, vendors: Vec<String>) -> Vec<ConfigFragment> {
    vec![
        ConfigFragment {
            devtool: Some(SourceMapMode::EvalSourceMap),
            ..ConfigFragment::default()
        },
        helpers::setup_styles(&paths.theme),
        helpers::extract_bundle("vendor", vendors),
    ]
}
