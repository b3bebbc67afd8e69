use swaram_config::ChatConfig;
use swaram_core::UpstreamClient;

use crate::{
    error::ChatError,
    persona::with_persona,
    types::{ChatMessage, ChatRequest, ChatResponse, Completion, CompletionPayload},
};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Forwards conversations to the upstream chat completion endpoint
pub struct Server {
    upstream: UpstreamClient,
    config: ChatConfig,
}

impl Server {
    pub fn new(upstream: UpstreamClient, config: ChatConfig) -> Self {
        Self { upstream, config }
    }

    /// Fail fast when no upstream credential is configured
    pub fn ensure_credential(&self) -> crate::error::Result<()> {
        Ok(self.upstream.ensure_credential(COMPLETIONS_PATH)?)
    }

    /// Complete a conversation and extract the reply text
    ///
    /// `language_code` is only logged: the persona already tells the model
    /// to answer in the user's language.
    pub async fn complete(&self, request: ChatRequest) -> crate::error::Result<ChatResponse> {
        let language_code = request.language_code.as_deref().unwrap_or(&self.config.default_language);

        tracing::info!(
            messages = request.messages.len(),
            language_code = %language_code,
            "chat request received"
        );

        let messages = with_persona(request.messages, &self.config.system_prompt);
        let payload = self.payload(&messages);

        let raw = self.upstream.post_json(COMPLETIONS_PATH, &payload).await?;

        let completion: Completion = swaram_core::decode(COMPLETIONS_PATH, &raw)?;

        let Some(reply) = completion.into_reply() else {
            tracing::error!(endpoint = COMPLETIONS_PATH, "upstream completion has no choices[0].message.content");
            return Err(ChatError::MissingReply);
        };

        tracing::debug!(reply_len = reply.len(), "chat reply received");

        Ok(ChatResponse { reply, raw })
    }

    fn payload<'a>(&'a self, messages: &'a [ChatMessage]) -> CompletionPayload<'a> {
        CompletionPayload {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            reasoning_effort: self.config.reasoning_effort.as_deref(),
            wiki_grounding: self.config.wiki_grounding,
        }
    }
}
