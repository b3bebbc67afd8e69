//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use swaram_config::{Config, CorsConfig, ServerConfig, UpstreamConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with a test key and the real base URL
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                upstream: UpstreamConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..UpstreamConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the upstream client at a mock backend
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.config.upstream.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Remove the upstream credential
    pub fn without_api_key(mut self) -> Self {
        self.config.upstream.api_key = None;
        self
    }

    /// Set the upstream timeout, e.g. `"200ms"`
    pub fn with_timeout(mut self, timeout: &str) -> Self {
        self.config.upstream.timeout = timeout.to_owned();
        self
    }

    /// Replace the chat persona
    pub fn with_system_prompt(mut self, prompt: &str) -> Self {
        self.config.chat.system_prompt = prompt.to_owned();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Send no CORS headers
    pub fn without_cors(mut self) -> Self {
        self.config.server.cors.enabled = false;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
