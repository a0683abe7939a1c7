//! Provider trait and implementations for hosted model backends

pub mod anthropic;
pub mod google;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use doublecheck_core::{ToolError, ToolOutcome};
use doublecheck_prompt::AssembledPrompt;
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use crate::error::LlmError;

/// Longest provider error detail passed back to the caller
const MAX_ERROR_DETAIL_CHARS: usize = 500;

/// Trait implemented by each provider backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Send one completion request and return the reply text
    async fn complete(&self, prompt: &AssembledPrompt) -> Result<String, LlmError>;

    /// Run a review and fold any failure into the outcome
    ///
    /// Nothing escapes this boundary: every error becomes a failure outcome
    /// with a sanitized message.
    async fn review(&self, prompt: &AssembledPrompt) -> ToolOutcome {
        let started = Instant::now();
        let result = self.complete(prompt).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(text) => {
                tracing::info!(
                    provider = self.name(),
                    model = self.model(),
                    latency_ms,
                    response_chars = text.chars().count(),
                    "provider call succeeded"
                );
                ToolOutcome::success(text)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.name(),
                    model = self.model(),
                    latency_ms,
                    error_type = e.error_type(),
                    error = %e,
                    "provider call failed"
                );
                ToolOutcome::from_error(&e)
            }
        }
    }
}

/// Build the shared HTTP client for a provider
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Internal(anyhow::anyhow!("failed to build HTTP client: {e}")))
}

/// Replace every occurrence of the credential with a marker
pub(crate) fn redact(text: &str, secret: &SecretString) -> String {
    let secret = secret.expose_secret();
    if secret.is_empty() {
        return text.to_owned();
    }
    text.replace(secret, "[REDACTED]")
}

/// Map a `reqwest` send failure to a provider error
pub(crate) fn request_error(provider: &str, error: &reqwest::Error, secret: &SecretString) -> LlmError {
    if error.is_timeout() {
        return LlmError::Timeout {
            provider: provider.to_owned(),
        };
    }

    LlmError::Transport {
        provider: provider.to_owned(),
        message: redact(&error.to_string(), secret),
    }
}

/// Map a non-success status and its detail to a provider error
pub(crate) fn status_error(provider: &str, status: StatusCode, detail: &str, secret: &SecretString) -> LlmError {
    let message = clip(&redact(detail, secret));
    let provider = provider.to_owned();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication {
            provider,
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited { provider, message },
        _ => LlmError::Upstream {
            provider,
            status: status.as_u16(),
            message,
        },
    }
}

/// Map an unparseable success body to a provider error
pub(crate) fn malformed(provider: &str, error: &serde_json::Error) -> LlmError {
    LlmError::MalformedResponse {
        provider: provider.to_owned(),
        message: error.to_string(),
    }
}

fn clip(detail: &str) -> String {
    let detail = detail.trim();
    match detail.char_indices().nth(MAX_ERROR_DETAIL_CHARS) {
        Some((end, _)) => format!("{}...", &detail[..end]),
        None if detail.is_empty() => "no details provided".to_owned(),
        None => detail.to_owned(),
    }
}
