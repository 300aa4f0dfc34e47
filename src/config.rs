//! Configuration describing the CDN rewrite behaviour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

const DEFAULT_CONFIG_FILE: &str = "cdn.config.json";

/// Three-way HTTPS policy applied when rewriting static-asset URLs.
///
/// Serialized as `true`, `false` or `null`/absent in configuration files, so
/// "unset" is never conflated with "off".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpsPolicy {
    /// Always emit `https` URLs regardless of the inbound request.
    ForceOn,
    /// Always emit `http` URLs regardless of the inbound request.
    ForceOff,
    /// Mirror the inbound request's scheme.
    #[default]
    Inherit,
}

impl HttpsPolicy {
    /// Select the URL scheme for a request with the given security flag.
    pub fn scheme(self, request_secure: bool) -> &'static str {
        match self {
            Self::ForceOn => "https",
            Self::ForceOff => "http",
            Self::Inherit => {
                if request_secure {
                    "https"
                } else {
                    "http"
                }
            }
        }
    }
}

impl From<Option<bool>> for HttpsPolicy {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::ForceOn,
            Some(false) => Self::ForceOff,
            None => Self::Inherit,
        }
    }
}

impl<'de> Deserialize<'de> for HttpsPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.into())
    }
}

/// CDN rewrite configuration established once at application startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// CDN host substituted into static-asset URLs. Rewriting is disabled
    /// entirely when absent. The value is not validated and passes through
    /// verbatim into produced URLs.
    pub domain: Option<String>,
    /// Scheme policy for rewritten URLs.
    pub https: HttpsPolicy,
    /// When enabled, insert the asset file's last-modified epoch seconds as a
    /// cache-busting path segment and a `t` query parameter.
    pub timestamp: bool,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            domain: None,
            https: HttpsPolicy::Inherit,
            timestamp: true,
        }
    }
}

impl CdnConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to defaults so hosts without a CDN setup keep working with the
    /// default URL builder.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
