use doublecheck_core::{ErrorCategory, ToolError};
use thiserror::Error;

/// Errors raised while resolving startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required credential is unset or blank
    #[error("{var} is required but is not set")]
    MissingCredential { var: &'static str },

    /// Required credential still holds a template or example value
    #[error("{var} looks like a placeholder value; set it to a real API key")]
    PlaceholderCredential { var: &'static str },

    /// Optional setting is present but cannot be parsed
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

impl ToolError for ConfigError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::PlaceholderCredential { .. } => "placeholder_credential",
            Self::InvalidValue { .. } => "invalid_setting",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
