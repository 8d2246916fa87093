//! Tests for the fragment merge rules used during composition.

use std::path::PathBuf;

use rig_config::descriptor::{
    ConfigFragment, LoaderRule, ModuleOptions, OutputOptions, PluginRequest, ResolveOptions,
    SourceMapMode,
};
use serde_json::json;

fn rule(loader: &str) -> LoaderRule {
    LoaderRule {
        test: vec![format!(r"\.{loader}$")],
        loader: loader.to_string(),
        include: None,
        exclude: None,
    }
}

fn with_rules(rules: Vec<LoaderRule>) -> ConfigFragment {
    ConfigFragment {
        module: Some(ModuleOptions {
            rules,
            no_parse: vec![],
        }),
        ..ConfigFragment::default()
    }
}

#[test]
fn array_merge_is_associative_append() {
    let a = with_rules(vec![rule("ts")]);
    let b = with_rules(vec![rule("json"), rule("html")]);
    let c = with_rules(vec![rule("png")]);

    let merged = a.merge(b).merge(c);
    let loaders: Vec<_> = merged
        .module
        .unwrap()
        .rules
        .into_iter()
        .map(|r| r.loader)
        .collect();
    assert_eq!(loaders, vec!["ts", "json", "html", "png"]);
}

#[test]
fn array_merge_keeps_duplicates() {
    let a = ConfigFragment {
        plugins: vec![PluginRequest::DedupeModules],
        ..ConfigFragment::default()
    };
    let b = ConfigFragment {
        plugins: vec![PluginRequest::DedupeModules],
        ..ConfigFragment::default()
    };

    let merged = a.merge(b);
    assert_eq!(merged.plugins.len(), 2);
}

#[test]
fn scalar_merge_is_right_biased() {
    let base = ConfigFragment {
        devtool: Some(SourceMapMode::SourceMap),
        ..ConfigFragment::default()
    };
    let overlay = ConfigFragment {
        devtool: Some(SourceMapMode::EvalSourceMap),
        ..ConfigFragment::default()
    };

    let merged = base.merge(overlay);
    assert_eq!(merged.devtool, Some(SourceMapMode::EvalSourceMap));
}

#[test]
fn omitted_scalar_keeps_base_value() {
    let base = ConfigFragment {
        devtool: Some(SourceMapMode::SourceMap),
        ..ConfigFragment::default()
    };

    let merged = base.merge(ConfigFragment::default());
    assert_eq!(merged.devtool, Some(SourceMapMode::SourceMap));
}

#[test]
fn nested_sections_recurse_and_pass_through() {
    let base = ConfigFragment {
        output: Some(OutputOptions {
            path: Some(PathBuf::from("www")),
            filename: Some("[name].js".to_string()),
            chunk_filename: None,
        }),
        resolve: Some(ResolveOptions {
            extensions: vec![".ts".to_string()],
            roots: vec![],
            modules_dirs: vec![],
        }),
        ..ConfigFragment::default()
    };
    let overlay = ConfigFragment {
        output: Some(OutputOptions {
            filename: Some("[name].[chunkhash].js".to_string()),
            ..OutputOptions::default()
        }),
        ..ConfigFragment::default()
    };

    let merged = base.merge(overlay);
    let output = merged.output.unwrap();
    assert_eq!(output.path, Some(PathBuf::from("www"))); // only in base
    assert_eq!(output.filename.as_deref(), Some("[name].[chunkhash].js"));
    // resolve present only in base, passes through unchanged
    assert_eq!(merged.resolve.unwrap().extensions, vec![".ts"]);
}

#[test]
fn entry_map_is_right_biased_per_key() {
    let mut base = ConfigFragment::default();
    base.entry.insert("app".to_string(), PathBuf::from("a.ts"));
    base.entry.insert("style".to_string(), PathBuf::from("s.scss"));
    let mut overlay = ConfigFragment::default();
    overlay.entry.insert("app".to_string(), PathBuf::from("b.ts"));

    let merged = base.merge(overlay);
    assert_eq!(merged.entry["app"], PathBuf::from("b.ts"));
    assert_eq!(merged.entry["style"], PathBuf::from("s.scss"));
}

#[test]
fn extra_arrays_concatenate_and_extra_scalars_override() {
    let mut base = ConfigFragment::default();
    base.extra.insert(
        "style".to_string(),
        json!({"include_paths": ["one"], "sourcemaps": false}),
    );
    let mut overlay = ConfigFragment::default();
    overlay.extra.insert(
        "style".to_string(),
        json!({"include_paths": ["two"], "sourcemaps": true}),
    );

    let merged = base.merge(overlay);
    assert_eq!(
        merged.extra["style"],
        json!({"include_paths": ["one", "two"], "sourcemaps": true})
    );
}

#[test]
fn merge_over_three_fragments_concatenates_extra_arrays_in_order() {
    let fragment = |items: &[&str]| {
        let mut f = ConfigFragment::default();
        f.extra.insert("tags".to_string(), json!(items));
        f
    };

    let merged = fragment(&["a"]).merge(fragment(&["b"])).merge(fragment(&["c"]));
    assert_eq!(merged.extra["tags"], json!(["a", "b", "c"]));
}
