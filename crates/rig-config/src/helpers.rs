//! Canned overlay fragments.
//!
//! Each helper wraps one collaborator-facing request in a fragment so the
//! overlay resolver can compose them like any other partial configuration.

use std::path::Path;

use crate::descriptor::{ConfigFragment, PluginRequest};
use crate::dev::{default_host, default_port, DevServerOptions};

/// Request cleanup of the output directory before the bundler writes.
pub fn clean(dir: &Path) -> ConfigFragment {
    plugin_fragment(PluginRequest::CleanOutputDir {
        dir: dir.to_path_buf(),
    })
}

/// Request splitting the given modules into a separately named bundle.
pub fn extract_bundle(name: &str, entries: Vec<String>) -> ConfigFragment {
    plugin_fragment(PluginRequest::ExtractBundle {
        name: name.to_string(),
        entries,
    })
}

/// Request extraction of compiled styles into a standalone file.
pub fn extract_styles(entry: &Path) -> ConfigFragment {
    plugin_fragment(PluginRequest::ExtractStyles {
        entry: entry.to_path_buf(),
    })
}

/// Request style compilation wired for incremental rebuilds, no extraction.
pub fn setup_styles(entry: &Path) -> ConfigFragment {
    plugin_fragment(PluginRequest::SetupStyles {
        entry: entry.to_path_buf(),
    })
}

/// Dev-server settings overlay. Unset host/port fall back to
/// `localhost:8080`.
pub fn dev_server(host: Option<String>, port: Option<u16>) -> ConfigFragment {
    ConfigFragment {
        dev_server: Some(DevServerOptions {
            host: Some(host.unwrap_or_else(default_host)),
            port: Some(port.unwrap_or_else(default_port)),
        }),
        ..ConfigFragment::default()
    }
}

fn plugin_fragment(request: PluginRequest) -> ConfigFragment {
    ConfigFragment {
        plugins: vec![request],
        ..ConfigFragment::default()
    }
}
