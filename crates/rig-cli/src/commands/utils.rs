//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use rig_config::{DependencyManifest, PackageManifest};

use crate::error::{CliError, Result};
use crate::ui;

/// Load the dependency manifest for a project.
///
/// An explicitly given path must exist; the conventional `<root>/package.json`
/// may be absent, in which case the vendor bundle is simply empty.
pub fn load_manifest(root: &Path, explicit: Option<&PathBuf>) -> Result<DependencyManifest> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.clone()));
            }
            path.clone()
        }
        None => {
            let default = root.join("package.json");
            if !default.exists() {
                ui::warning("No package.json found; vendor bundle will be empty");
                return Ok(DependencyManifest::new());
            }
            default
        }
    };

    let manifest = PackageManifest::load(&path)?;
    tracing::debug!(
        manifest = %path.display(),
        dependencies = manifest.dependencies.len(),
        "loaded dependency manifest"
    );
    Ok(manifest.dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_default_manifest_is_empty() {
        let dir = TempDir::new().unwrap();
        let manifest = load_manifest(dir.path(), None).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn missing_explicit_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.json");
        let result = load_manifest(dir.path(), Some(&missing));
        assert!(matches!(result.unwrap_err(), CliError::FileNotFound(_)));
    }

    #[test]
    fn default_manifest_is_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"rxjs": "5.0.1"}}"#,
        )
        .unwrap();

        let manifest = load_manifest(dir.path(), None).unwrap();
        assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["rxjs"]);
    }
}
