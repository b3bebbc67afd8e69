use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Default Sarvam API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.sarvam.ai";

/// Connection settings for the upstream speech/language API
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Subscription key sent as `api-subscription-key`
    ///
    /// Optional on purpose: without it the gateway still starts and every
    /// endpoint answers with a misconfiguration error.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Bound on each outbound call, e.g. "30s" or "1m"
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl UpstreamConfig {
    /// The credential, treating an empty string as absent
    pub fn credential(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Parsed outbound timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid duration
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid upstream timeout '{}': {e}", self.timeout))
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL must be valid")
}

fn default_timeout() -> String {
    "30s".to_string()
}
