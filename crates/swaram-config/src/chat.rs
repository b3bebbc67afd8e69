use serde::Deserialize;

/// Persona used when the conversation carries no system message
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful conversational assistant. Respond in the same language the user speaks. Keep responses concise (1-3 sentences) since they will be spoken aloud.";

/// Chat completion settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Upstream chat model
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on reply length, kept small for spoken output
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Persona text prepended as the system message
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Language assumed when the caller omits `language_code`
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Forwarded only when set ("low", "medium" or "high")
    #[serde(default)]
    pub reasoning_effort: Option<String>,
    /// Forwarded only when set
    #[serde(default)]
    pub wiki_grounding: Option<bool>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
            default_language: default_language(),
            reasoning_effort: None,
            wiki_grounding: None,
        }
    }
}

fn default_model() -> String {
    "sarvam-m".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    300
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_language() -> String {
    "hi-IN".to_string()
}
