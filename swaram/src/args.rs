use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use secrecy::SecretString;
use swaram_config::Config;
use url::Url;

/// Swaram voice gateway
#[derive(Debug, Parser)]
#[command(name = "swaram", about = "Voice conversation gateway for the Sarvam speech and language API")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long, env = "SWARAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "SWARAM_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Sarvam API subscription key
    #[arg(long, env = "SARVAM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the Sarvam API base URL
    #[arg(long, env = "SARVAM_BASE_URL")]
    pub base_url: Option<Url>,

    /// Log filter directive, e.g. `info` or `swaram=debug`
    #[arg(long, env = "SWARAM_LOG")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Load the configuration file (if any) and apply command line overrides
    pub fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(listen) = self.listen {
            config.server.listen_address = Some(listen);
        }

        if let Some(api_key) = self.api_key {
            config.upstream.api_key = Some(SecretString::from(api_key));
        }

        if let Some(base_url) = self.base_url {
            config.upstream.base_url = base_url;
        }

        config.validate()?;

        Ok(config)
    }
}
