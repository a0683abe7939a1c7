//! Anthropic Messages API provider implementation

use std::time::Duration;

use async_trait::async_trait;
use doublecheck_config::ProviderSettings;
use doublecheck_prompt::AssembledPrompt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Provider, http_client, malformed, request_error, status_error};
use crate::error::LlmError;
use crate::protocol::anthropic::{AnthropicErrorResponse, AnthropicMessage, AnthropicRequest, AnthropicResponse};

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create from resolved provider settings
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Internal` if the HTTP client cannot be built.
    pub fn new(settings: &ProviderSettings, timeout: Duration, max_tokens: u32) -> Result<Self, LlmError> {
        Ok(Self {
            name: "anthropic".to_owned(),
            client: http_client(timeout)?,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens,
        })
    }

    /// Build the messages endpoint URL
    fn messages_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/messages")
    }

    fn wire_request(&self, prompt: &AssembledPrompt) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: prompt.system().map(ToOwned::to_owned),
            messages: vec![AnthropicMessage {
                role: "user".to_owned(),
                content: prompt.text(),
            }],
        }
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &AssembledPrompt) -> Result<String, LlmError> {
        let wire_request = self.wire_request(prompt);

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            prompt_chars = wire_request.messages[0].content.chars().count(),
            "sending messages request"
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("x-api-key", self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, timeout = e.is_timeout(), "upstream request failed");
                request_error(&self.name, &e, &self.api_key)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_error(&self.name, &e, &self.api_key))?;

        if !status.is_success() {
            tracing::warn!(provider = %self.name, status = %status, "upstream returned error");
            let detail = serde_json::from_str::<AnthropicErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(status_error(&self.name, status, &detail, &self.api_key));
        }

        let wire_response: AnthropicResponse = serde_json::from_str(&body).map_err(|e| malformed(&self.name, &e))?;

        tracing::debug!(
            provider = %self.name,
            stop_reason = wire_response.stop_reason.as_deref().unwrap_or("unknown"),
            "messages response received"
        );

        Ok(wire_response.text())
    }
}
