use serde::Serialize;

use crate::{ErrorCategory, ToolError};

/// Result of a single tool call
///
/// Either the provider's text passed through verbatim, or a failure that
/// has already been sanitized for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    /// Provider text, unmodified
    Success { text: String },
    /// Caller-safe failure description
    Failure(Failure),
}

/// Failure payload returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Broad error category
    pub category: ErrorCategory,
    /// Machine-readable error type
    pub error_type: String,
    /// Human-readable message
    pub message: String,
}

impl ToolOutcome {
    /// Build a success outcome
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    /// Build a failure outcome from any domain error
    pub fn from_error<E: ToolError + ?Sized>(error: &E) -> Self {
        Self::Failure(Failure {
            category: error.category(),
            error_type: error.error_type().to_owned(),
            message: error.client_message(),
        })
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure payload, if any
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success { .. } => None,
        }
    }

    /// Text shown to the caller
    ///
    /// Failures are prefixed so a host can tell them apart from a review
    /// even when it ignores the protocol-level error flag.
    pub fn to_text(&self) -> String {
        match self {
            Self::Success { text } => text.clone(),
            Self::Failure(failure) => format!("Error [{}]: {}", failure.error_type, failure.message),
        }
    }
}
