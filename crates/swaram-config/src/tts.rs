use serde::Deserialize;

/// Text-to-speech settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Upstream synthesis model
    #[serde(default = "default_model")]
    pub model: String,
    /// Longest text forwarded upstream, in characters; the rest is dropped
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_speaker")]
    pub default_speaker: String,
    #[serde(default = "default_enable_preprocessing")]
    pub enable_preprocessing: bool,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_chars: default_max_chars(),
            default_language: default_language(),
            default_speaker: default_speaker(),
            enable_preprocessing: default_enable_preprocessing(),
        }
    }
}

fn default_model() -> String {
    "bulbul:v2".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_chars() -> usize {
    1499
}

fn default_language() -> String {
    "hi-IN".to_string()
}

fn default_speaker() -> String {
    "Anushka".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_enable_preprocessing() -> bool {
    true
}
