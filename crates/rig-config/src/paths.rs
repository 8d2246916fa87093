//! Project path resolution and platform theme mapping.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Target device family, selecting a visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    #[default]
    Android,
    Wp,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Wp => "wp",
        };
        f.write_str(token)
    }
}

/// Mapping from platform to its theme entry file.
///
/// Every platform the build supports must have an entry here; resolving a
/// platform without one is a hard configuration error, not a silent fallback.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<Platform, PathBuf>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        let mut themes = IndexMap::new();
        themes.insert(Platform::Ios, PathBuf::from("app.ios.scss"));
        themes.insert(Platform::Android, PathBuf::from("app.md.scss"));
        themes.insert(Platform::Wp, PathBuf::from("app.wp.scss"));
        Self { themes }
    }
}

impl ThemeRegistry {
    /// Registry with no mappings. Useful as a starting point for
    /// [`with_theme`](Self::with_theme) when the defaults don't apply.
    pub fn empty() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    pub fn with_theme(mut self, platform: Platform, file: impl Into<PathBuf>) -> Self {
        self.themes.insert(platform, file.into());
        self
    }

    /// Look up the theme entry file for a platform.
    pub fn theme_file(&self, platform: Platform) -> Result<&Path> {
        self.themes
            .get(&platform)
            .map(PathBuf::as_path)
            .ok_or(ConfigError::ThemeNotMapped { platform })
    }
}

/// Resolved source/output directories and the platform theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Application source directory (`<root>/app`).
    pub src: PathBuf,
    /// Bundler output directory (`<root>/www`).
    pub www: PathBuf,
    /// Platform-specific theme entry file.
    pub theme: PathBuf,
}

impl ProjectPaths {
    /// Resolve project paths for a platform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThemeNotMapped`] if the registry has no theme
    /// for `platform`.
    pub fn resolve(
        root: impl AsRef<Path>,
        platform: Platform,
        themes: &ThemeRegistry,
    ) -> Result<Self> {
        let root = root.as_ref();
        let src = root.join("app");
        let theme = src.join("theme").join(themes.theme_file(platform)?);
        tracing::debug!(%platform, theme = %theme.display(), "resolved platform theme");

        Ok(Self {
            src,
            www: root.join("www"),
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_platform_has_a_theme() {
        let themes = ThemeRegistry::default();
        for platform in [Platform::Ios, Platform::Android, Platform::Wp] {
            assert!(themes.theme_file(platform).is_ok());
        }
    }

    #[test]
    fn resolve_joins_theme_under_source_dir() {
        let paths =
            ProjectPaths::resolve("/project", Platform::Ios, &ThemeRegistry::default()).unwrap();
        assert_eq!(paths.src, PathBuf::from("/project/app"));
        assert_eq!(paths.www, PathBuf::from("/project/www"));
        assert_eq!(paths.theme, PathBuf::from("/project/app/theme/app.ios.scss"));
    }

    #[test]
    fn unmapped_platform_is_a_hard_error() {
        let themes = ThemeRegistry::empty().with_theme(Platform::Ios, "app.ios.scss");
        let result = ProjectPaths::resolve("/project", Platform::Wp, &themes);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ThemeNotMapped {
                platform: Platform::Wp
            }
        ));
    }
}
