//! Development server configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl DevServerOptions {
    pub(crate) fn merge(self, overlay: Self) -> Self {
        Self {
            host: overlay.host.or(self.host),
            port: overlay.port.or(self.port),
        }
    }
}

pub(crate) fn default_host() -> String {
    "localhost".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_overrides_only_what_it_defines() {
        let base = DevServerOptions {
            host: Some("localhost".to_string()),
            port: Some(8080),
        };
        let overlay = DevServerOptions {
            host: None,
            port: Some(3000),
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.host.as_deref(), Some("localhost"));
        assert_eq!(merged.port, Some(3000));
    }
}
