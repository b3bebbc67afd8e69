#![allow(clippy::must_use_candidate)]

pub mod chat;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod tts;
pub mod upstream;

use serde::Deserialize;

pub use chat::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use stt::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use tts::*;
pub use upstream::*;

/// Top-level Swaram configuration
///
/// Every section is optional; an empty file yields the stock Sarvam setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Inbound listener configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API connection and credential
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Speech-to-text settings
    #[serde(default)]
    pub stt: SttConfig,
    /// Chat completion settings
    #[serde(default)]
    pub chat: ChatConfig,
    /// Text-to-speech settings
    #[serde(default)]
    pub tts: TtsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
