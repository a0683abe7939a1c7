//! Google Generative Language API provider implementation

use std::time::Duration;

use async_trait::async_trait;
use doublecheck_config::ProviderSettings;
use doublecheck_prompt::AssembledPrompt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Provider, http_client, malformed, request_error, status_error};
use crate::error::LlmError;
use crate::protocol::google::{GoogleErrorResponse, GoogleRequest, GoogleResponse};

/// Header carrying the API key, kept out of the URL so it never shows up
/// in transport error messages
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language API provider
pub struct GoogleProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
}

impl GoogleProvider {
    /// Create from resolved provider settings
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Internal` if the HTTP client cannot be built.
    pub fn new(settings: &ProviderSettings, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            name: "google".to_owned(),
            client: http_client(timeout)?,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Build the `generateContent` endpoint URL
    ///
    /// Accepts model identifiers with or without the `models/` prefix.
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!("{base}/models/{model}:generateContent")
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &AssembledPrompt) -> Result<String, LlmError> {
        let text = prompt.text();

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            prompt_chars = text.chars().count(),
            "sending generateContent request"
        );

        let wire_request = GoogleRequest::single_turn(text, prompt.system());

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
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
            let detail = serde_json::from_str::<GoogleErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(status_error(&self.name, status, &detail, &self.api_key));
        }

        let wire_response: GoogleResponse = serde_json::from_str(&body).map_err(|e| malformed(&self.name, &e))?;

        if let Some(reason) = wire_response.block_reason() {
            tracing::warn!(provider = %self.name, reason, "prompt was blocked by provider");
        }

        Ok(wire_response.text())
    }
}
