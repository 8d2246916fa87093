//! Immutable snapshot of the build-relevant environment variables.
//!
//! Process state is read exactly once, at the start of a run, into a
//! [`BuildEnv`] that is passed by reference into every component. No other
//! part of the pipeline touches `std::env`.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::paths::Platform;

/// Environment variables consumed by configuration assembly.
const ENV_KEYS: &[&str] = &[
    "NODE_ENV",
    "API_URL",
    "CLIENT_ID",
    "CLIENT_SECRET",
    "PLATFORM",
    "HOST",
    "PORT",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Build-mode indicator; anything other than `"production"` counts as a
    /// development build.
    #[serde(default = "default_node_env")]
    pub node_env: String,

    /// API endpoint injected as a compile-time constant.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Credential values injected verbatim as compile-time constants.
    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub client_secret: Option<String>,

    /// Platform selector; unset defaults to [`Platform::Android`].
    #[serde(default)]
    pub platform: Platform,

    /// Dev-server host override.
    #[serde(default)]
    pub host: Option<String>,

    /// Dev-server port override.
    #[serde(default)]
    pub port: Option<u16>,
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self {
            node_env: default_node_env(),
            api_url: None,
            client_id: None,
            client_secret: None,
            platform: Platform::default(),
            host: None,
            port: None,
        }
    }
}

impl BuildEnv {
    /// Capture the environment snapshot for this run.
    ///
    /// Defaults are layered first, then the recognized process environment
    /// variables on top.
    ///
    /// # Errors
    ///
    /// Fails if a variable holds an unusable value, e.g. a `PLATFORM` token
    /// that is not one of `ios`, `android`, `wp`, or a non-numeric `PORT`.
    pub fn capture() -> Result<Self> {
        let env: BuildEnv = Figment::new()
            .merge(Serialized::defaults(BuildEnv::default()))
            .merge(
                Env::raw()
                    .only(ENV_KEYS)
                    .map(|key| key.as_str().to_ascii_lowercase().into()),
            )
            .extract()
            .map_err(|e| ConfigError::InvalidEnvValue {
                field: if e.path.is_empty() {
                    "environment".to_string()
                } else {
                    e.path.join(".")
                },
                hint: e.to_string(),
            })?;

        tracing::debug!(
            node_env = %env.node_env,
            platform = %env.platform,
            "captured environment snapshot"
        );
        Ok(env)
    }

    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }
}

fn default_node_env() -> String {
    "development".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_android_development() {
        let env = BuildEnv::default();
        assert_eq!(env.node_env, "development");
        assert_eq!(env.platform, Platform::Android);
        assert!(!env.is_production());
        assert!(env.host.is_none());
    }

    #[test]
    fn production_flag_matches_node_env() {
        let env = BuildEnv {
            node_env: "production".to_string(),
            ..BuildEnv::default()
        };
        assert!(env.is_production());
    }
}
