use std::path::Path;

use crate::{AnyOrArray, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// A missing upstream credential is not an error: the gateway starts and
    /// reports the problem per request.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server_config()?;
        self.validate_upstream_config()?;
        self.validate_chat_config()?;
        self.validate_tts_config()?;
        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        let cors = &self.server.cors;

        if cors.enabled
            && cors.credentials
            && [&cors.origins, &cors.methods, &cors.headers].contains(&&AnyOrArray::Any)
        {
            anyhow::bail!("server.cors.credentials cannot be combined with wildcard origins, methods or headers");
        }

        Ok(())
    }

    fn validate_upstream_config(&self) -> anyhow::Result<()> {
        let scheme = self.upstream.base_url.scheme();

        if scheme != "http" && scheme != "https" {
            anyhow::bail!("upstream.base_url must use http or https, got '{scheme}'");
        }

        self.upstream.timeout_duration()?;

        Ok(())
    }

    fn validate_chat_config(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.chat.temperature) {
            anyhow::bail!("chat.temperature must be within 0.0..=2.0, got {}", self.chat.temperature);
        }

        if self.chat.max_tokens == 0 {
            anyhow::bail!("chat.max_tokens must be greater than 0");
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if self.tts.max_chars == 0 {
            anyhow::bail!("tts.max_chars must be greater than 0");
        }

        Ok(())
    }
}
