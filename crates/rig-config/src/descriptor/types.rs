use serde::{Deserialize, Serialize};

/// Source-map generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Fastest rebuilds; modules are eval'd without maps.
    Eval,
    /// Debugging-friendly maps with fast incremental rebuilds.
    EvalSourceMap,
    /// Cheaper maps without column information.
    CheapSourceMap,
    /// Full external source maps.
    SourceMap,
}

/// Where generated script tags are injected into the HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectPosition {
    Head,
    /// End of the document body.
    #[default]
    Body,
}
