use serde::Serialize;
use strum::{AsRefStr, Display};

/// Top-level error taxonomy shared by every stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// Startup configuration is missing or invalid
    Configuration,
    /// A tool call carried missing or malformed arguments
    Validation,
    /// The hosted provider rejected the request or was unreachable
    Provider,
}

/// Trait for domain errors that can be reported back to a tool caller
///
/// Implemented by each feature crate's error type. The dispatcher turns
/// these into failure outcomes, keeping domain errors decoupled from the
/// protocol layer.
pub trait ToolError: std::error::Error {
    /// Category this error belongs to
    fn category(&self) -> ErrorCategory;

    /// Machine-readable error type (e.g. `rate_limit_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to the tool caller
    fn client_message(&self) -> String;
}
