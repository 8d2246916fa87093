//! Dependency manifest loading.
//!
//! The manifest is an externally supplied `package.json`; only the key set of
//! its `dependencies` field is consumed here.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Package name → version constraint, in declaration order.
pub type DependencyManifest = IndexMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dependencies: DependencyManifest,
}

impl PackageManifest {
    /// Load a `package.json` from disk.
    ///
    /// A manifest without a `dependencies` field is valid and yields an empty
    /// map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
            path: path.to_path_buf(),
            hint: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_reads_dependencies_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(
            &path,
            r#"{
                "name": "demo",
                "dependencies": {
                    "zeta": "1.0.0",
                    "alpha": "2.0.0"
                }
            }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("demo"));
        let keys: Vec<_> = manifest.dependencies.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn missing_dependencies_field_is_empty_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "bare"}"#).unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn malformed_json_is_invalid_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{not json").unwrap();

        let result = PackageManifest::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidManifest { .. }
        ));
    }
}
