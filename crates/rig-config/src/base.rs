//! The environment-independent base fragment.

use indexmap::IndexMap;
use serde_json::json;

use crate::descriptor::{
    ConfigFragment, InjectPosition, LoaderRule, ModuleOptions, OutputOptions, PluginRequest,
    ResolveOptions,
};
use crate::env::BuildEnv;
use crate::paths::ProjectPaths;

/// Font and icon binaries copied through as-is. Anything not on this list is
/// not a recognized binary asset.
const FONT_ASSETS: &[&str] = &[
    "ionicons.svg",
    "ionicons.eot",
    "ionicons.ttf",
    "ionicons.woff",
    "roboto-bold.woff",
    "roboto-medium.woff",
    "roboto-light.woff",
    "roboto-regular.woff",
    "roboto-bold.ttf",
    "roboto-medium.ttf",
    "roboto-light.ttf",
    "roboto-regular.ttf",
    "noto-sans-bold.ttf",
    "noto-sans-regular.ttf",
];

/// Build the base fragment: entries, unhashed output naming, resolution
/// settings, the static loader-rule table and the static plugin set.
///
/// Pure function of its inputs; overlays specialize the result per
/// invocation context.
pub fn base_fragment(paths: &ProjectPaths, env: &BuildEnv) -> ConfigFragment {
    let mut entry = IndexMap::new();
    entry.insert("app".to_string(), paths.src.join("app.ts"));
    entry.insert("style".to_string(), paths.theme.clone());

    let root = paths
        .src
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| paths.src.clone());

    let mut fragment = ConfigFragment {
        entry,
        output: Some(OutputOptions {
            path: Some(paths.www.clone()),
            filename: Some("[name].js".to_string()),
            chunk_filename: None,
        }),
        resolve: Some(ResolveOptions {
            extensions: ["", ".ts", ".js", ".html", ".scss", ".png"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            roots: vec![paths.src.clone(), root.join("node_modules")],
            modules_dirs: vec!["node_modules".to_string()],
        }),
        module: Some(ModuleOptions {
            rules: loader_rules(paths),
            no_parse: [
                r".+zone\.js/dist/.+",
                r".+angular2/bundles/.+",
                r"angular2-polyfills\.js",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }),
        plugins: vec![
            PluginRequest::TypeCheck,
            PluginRequest::DefineConstants {
                values: build_constants(env),
            },
            PluginRequest::HtmlTemplate {
                template: paths.src.join("index.html"),
                inject: InjectPosition::Body,
            },
            PluginRequest::SourceMaps {
                filename: "[file].map".to_string(),
                exclude: Some("^vendor".to_string()),
            },
        ],
        ..ConfigFragment::default()
    };

    // Style preprocessing include paths live outside the fixed schema; the
    // validator allowlists the section.
    fragment.extra.insert(
        "style".to_string(),
        json!({
            "include_paths": [
                root.join("node_modules/ionic-angular"),
                root.join("node_modules/ionicons/dist/scss"),
            ]
        }),
    );

    fragment
}

fn loader_rules(paths: &ProjectPaths) -> Vec<LoaderRule> {
    vec![
        // Type-checked sources compile to plain output
        LoaderRule {
            test: vec![r"\.ts$".to_string()],
            loader: "typed-compile".to_string(),
            include: Some(paths.src.clone()),
            exclude: Some("node_modules".to_string()),
        },
        // Data files parse into objects
        LoaderRule {
            test: vec![r"\.json$".to_string()],
            loader: "json".to_string(),
            include: None,
            exclude: None,
        },
        // Images are copied and renamed under img/
        LoaderRule {
            test: vec![r"\.(png|jpg|svg)$".to_string()],
            loader: "file?name=img/[ext]/[name].[ext]".to_string(),
            include: None,
            exclude: None,
        },
        // Markup inlines as a template string
        LoaderRule {
            test: vec![r"\.html$".to_string()],
            loader: "html".to_string(),
            include: None,
            exclude: None,
        },
        // Fixed allowlist of font/icon binaries, copied under fonts/
        LoaderRule {
            test: FONT_ASSETS
                .iter()
                .map(|name| format!(r"{}$", name.replace('.', r"\.")))
                .collect(),
            loader: "file?name=fonts/[name].[ext]".to_string(),
            include: None,
            exclude: None,
        },
    ]
}

/// Compile-time constants, JSON-encoded so the bundler can substitute them
/// verbatim. Absent values encode as `null`.
fn build_constants(env: &BuildEnv) -> IndexMap<String, String> {
    let mut values = IndexMap::new();
    values.insert("__DEV__".to_string(), encode(&!env.is_production()));
    values.insert("NODE_ENV".to_string(), encode(&env.node_env));
    values.insert("API_URL".to_string(), encode(&env.api_url));
    values.insert("CLIENT_ID".to_string(), encode(&env.client_id));
    values.insert("CLIENT_SECRET".to_string(), encode(&env.client_secret));
    values
}

fn encode<T: serde::Serialize>(value: &T) -> String {
    // Infallible for the string/bool/option inputs above
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
