mod persona;

pub use persona::{GREETING, PERSONA, build_conversation};

use crate::{
    Error, Result,
    config::LlmConfig,
    error::{ChatError, classify_error},
    llm::{ChatCompletionRequest, LlmClient, OpenAiClient},
};
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// Forwards a single question to the upstream model behind the fixed persona.
///
/// Holds no mutable state; one instance is shared by every request.
pub struct ChatRelay {
    client: Option<Arc<dyn LlmClient>>,
    model: String,
    timeout: Duration,
}

impl ChatRelay {
    /// `client` is `None` when no upstream credential is configured; every
    /// reply then fails with [`ChatError::Configuration`].
    pub fn new(
        client: Option<Arc<dyn LlmClient>>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client: Option<Arc<dyn LlmClient>> = if config.api_key().is_some() {
            Some(Arc::new(OpenAiClient::new(config)?))
        } else {
            warn!("No upstream API key configured; chat requests will be rejected");
            None
        };

        info!(
            "Chat relay using model {} with {}s upstream timeout",
            config.model, config.timeout_secs
        );

        Ok(Self::new(client, config.model.clone(), config.timeout()))
    }

    pub fn ensure_configured(&self) -> std::result::Result<&dyn LlmClient, ChatError> {
        self.client.as_deref().ok_or_else(|| {
            error!("Rejecting chat request: API key not configured");
            ChatError::Configuration
        })
    }

    /// Answers `message`, or maps the failure to the caller-facing category.
    pub async fn reply(&self, message: Option<&str>) -> std::result::Result<String, ChatError> {
        let client = self.ensure_configured()?;

        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| {
                warn!("Rejecting chat request with empty message");
                ChatError::empty_message()
            })?;

        info!("Received chat message: {}", message);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_conversation(message),
            max_tokens: None,
            temperature: None,
        };

        let outcome = tokio::time::timeout(self.timeout, client.create_chat_completion(request))
            .await
            .unwrap_or_else(|_| Err(Error::Timeout(self.timeout)));

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                let text = e.to_string();
                let kind = classify_error(&text);
                error!("Upstream chat completion failed ({:?}): {}", kind, text);
                return Err(kind.into());
            }
        };

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            warn!("Upstream returned no choices for response {}", response.id);
            ChatError::UpstreamEmpty
        })?;

        Ok(choice.message.content)
    }
}
