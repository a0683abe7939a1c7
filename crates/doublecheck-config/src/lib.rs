#![allow(clippy::must_use_candidate)]

mod env;
mod error;
mod loader;

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

pub use error::ConfigError;

/// Environment variable holding the Google API key
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Environment variable holding the Anthropic API key
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
/// Optional Gemini model override
pub const GEMINI_MODEL_VAR: &str = "DOUBLECHECK_GEMINI_MODEL";
/// Optional Sonnet model override
pub const SONNET_MODEL_VAR: &str = "DOUBLECHECK_SONNET_MODEL";
/// Optional Google API base URL override
pub const GEMINI_BASE_URL_VAR: &str = "DOUBLECHECK_GEMINI_BASE_URL";
/// Optional Anthropic API base URL override
pub const ANTHROPIC_BASE_URL_VAR: &str = "DOUBLECHECK_ANTHROPIC_BASE_URL";
/// Optional per-call timeout (e.g. `90s`, `2m`)
pub const TIMEOUT_VAR: &str = "DOUBLECHECK_TIMEOUT";
/// Optional `max_tokens` for Sonnet reviews
pub const SONNET_MAX_TOKENS_VAR: &str = "DOUBLECHECK_SONNET_MAX_TOKENS";

/// Default Gemini model used for plan critique
pub const DEFAULT_GEMINI_MODEL: &str = "models/gemini-3-pro-preview";
/// Default Claude model used for code review
pub const DEFAULT_SONNET_MODEL: &str = "claude-sonnet-4-5-20250929";
/// Default Google Generative Language API base URL
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Anthropic API base URL
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
/// Default `max_tokens` for Sonnet reviews
pub const DEFAULT_SONNET_MAX_TOKENS: u32 = 1800;

/// Process-wide configuration, resolved once at startup
///
/// Immutable after resolution. Both credentials are guaranteed non-empty
/// and not placeholders.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plan-critique provider (Google Gemini)
    pub gemini: ProviderSettings,
    /// Code-review provider (Anthropic Claude)
    pub sonnet: ProviderSettings,
    /// Timeout applied to each provider call
    pub request_timeout: Duration,
    /// `max_tokens` sent with Sonnet reviews
    pub sonnet_max_tokens: u32,
}

/// Resolved settings for a single provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// API key for authentication
    pub api_key: SecretString,
    /// Model identifier
    pub model: String,
    /// API base URL
    pub base_url: Url,
}
