//! Vendor bundle selection.

use crate::manifest::DependencyManifest;

/// Packages whose name contains this substring ship their own assets through
/// the loader rules and must not land in the vendor bundle.
pub const VENDOR_EXCLUDED_SUBSTRING: &str = "ionicons";

/// Derive the vendor-bundle module list from the dependency manifest.
///
/// Preserves manifest order and never includes a name containing
/// [`VENDOR_EXCLUDED_SUBSTRING`]. An empty manifest yields an empty list.
pub fn vendor_entries(manifest: &DependencyManifest) -> Vec<String> {
    manifest
        .keys()
        .filter(|name| !name.contains(VENDOR_EXCLUDED_SUBSTRING))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(pairs: &[(&str, &str)]) -> DependencyManifest {
        pairs
            .iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect()
    }

    #[test]
    fn filters_excluded_names_preserving_order() {
        let manifest = manifest(&[
            ("alpha", "1.0"),
            ("ionicons-core", "2.0"),
            ("beta", "3.0"),
        ]);
        assert_eq!(vendor_entries(&manifest), vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_manifest_yields_empty_list() {
        assert!(vendor_entries(&DependencyManifest::new()).is_empty());
    }

    #[test]
    fn selection_is_deterministic() {
        let manifest = manifest(&[("c", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(vendor_entries(&manifest), vendor_entries(&manifest));
        assert_eq!(vendor_entries(&manifest), vec!["c", "a", "b"]);
    }
}
