use serde::Deserialize;

/// Speech-to-text settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Upstream transcription model
    #[serde(default = "default_model")]
    pub model: String,
    /// Language sent when the caller omits `language_code`
    ///
    /// "unknown" is forwarded verbatim, the upstream decides what it means
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            default_language: default_language(),
        }
    }
}

fn default_model() -> String {
    "saarika:v2.5".to_string()
}

fn default_language() -> String {
    "unknown".to_string()
}
