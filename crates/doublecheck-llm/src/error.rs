use doublecheck_core::{ErrorCategory, ToolError};
use thiserror::Error;

/// Errors that can occur while calling a hosted provider
///
/// Messages are sanitized when the error is built, so `Display` output is
/// safe to log and to return to the caller.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider rejected the credential
    #[error("authentication rejected by {provider} ({status}): {message}")]
    Authentication {
        provider: String,
        status: u16,
        message: String,
    },

    /// Provider rate limit or quota exceeded
    #[error("rate limit exceeded at {provider}: {message}")]
    RateLimited { provider: String, message: String },

    /// Provider did not answer within the configured timeout
    #[error("request to {provider} timed out")]
    Timeout { provider: String },

    /// Connection-level failure before a response arrived
    #[error("failed to reach {provider}: {message}")]
    Transport { provider: String, message: String },

    /// Provider returned an unexpected non-success status
    #[error("{provider} returned {status}: {message}")]
    Upstream {
        provider: String,
        status: u16,
        message: String,
    },

    /// Provider answered with a body we could not interpret
    #[error("malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError for LlmError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Provider
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Authentication { .. } => "authentication_error",
            Self::RateLimited { .. } => "rate_limit_error",
            Self::Timeout { .. } => "timeout_error",
            Self::Transport { .. } => "transport_error",
            Self::Upstream { .. } => "upstream_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}
