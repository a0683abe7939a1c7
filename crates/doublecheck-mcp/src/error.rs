use doublecheck_core::{ErrorCategory, ToolError};
use thiserror::Error;

/// Protocol-level errors, reported as JSON-RPC errors rather than tool results
#[derive(Debug, Error)]
pub enum McpError {
    /// Tool name is not one of the registered tools
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },
}

/// Argument problems found before any provider is contacted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Required argument absent or null
    #[error("missing required argument `{name}`")]
    MissingArgument { name: &'static str },

    /// Argument present with a non-string value
    #[error("argument `{name}` must be a string, got {found}")]
    WrongType { name: &'static str, found: &'static str },

    /// Required argument is empty or whitespace
    #[error("argument `{name}` is empty")]
    BlankArgument { name: &'static str },
}

impl ToolError for ValidationError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    fn error_type(&self) -> &str {
        "validation_error"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
