use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::env::{is_placeholder, non_empty};
use crate::{
    ANTHROPIC_API_KEY_VAR, ANTHROPIC_BASE_URL_VAR, Config, ConfigError, DEFAULT_ANTHROPIC_BASE_URL,
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SONNET_MAX_TOKENS, DEFAULT_SONNET_MODEL, DEFAULT_TIMEOUT,
    GEMINI_BASE_URL_VAR, GEMINI_MODEL_VAR, GOOGLE_API_KEY_VAR, ProviderSettings, SONNET_MAX_TOKENS_VAR,
    SONNET_MODEL_VAR, TIMEOUT_VAR,
};

impl Config {
    /// Resolve configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending variable if a credential is
    /// missing, blank or a placeholder, or if an optional setting cannot be
    /// parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    ///
    /// Credentials are checked first so a missing key is reported even when
    /// other settings are also wrong.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let google_key = require_credential(&lookup, GOOGLE_API_KEY_VAR)?;
        let anthropic_key = require_credential(&lookup, ANTHROPIC_API_KEY_VAR)?;

        let gemini = ProviderSettings {
            api_key: google_key,
            model: non_empty(&lookup, GEMINI_MODEL_VAR).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned()),
            base_url: parse_url(&lookup, GEMINI_BASE_URL_VAR, DEFAULT_GEMINI_BASE_URL)?,
        };

        let sonnet = ProviderSettings {
            api_key: anthropic_key,
            model: non_empty(&lookup, SONNET_MODEL_VAR).unwrap_or_else(|| DEFAULT_SONNET_MODEL.to_owned()),
            base_url: parse_url(&lookup, ANTHROPIC_BASE_URL_VAR, DEFAULT_ANTHROPIC_BASE_URL)?,
        };

        let config = Self {
            gemini,
            sonnet,
            request_timeout: parse_timeout(&lookup)?,
            sonnet_max_tokens: parse_max_tokens(&lookup)?,
        };

        tracing::debug!(
            gemini_model = %config.gemini.model,
            sonnet_model = %config.sonnet.model,
            timeout_secs = config.request_timeout.as_secs(),
            "configuration resolved"
        );

        Ok(config)
    }
}

fn require_credential(
    lookup: impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<SecretString, ConfigError> {
    let value = non_empty(lookup, var).ok_or(ConfigError::MissingCredential { var })?;

    if is_placeholder(&value) {
        return Err(ConfigError::PlaceholderCredential { var });
    }

    Ok(SecretString::from(value))
}

fn parse_url(
    lookup: impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    let raw = non_empty(lookup, var).unwrap_or_else(|| default.to_owned());

    let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            var,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    Ok(url)
}

fn parse_timeout(lookup: impl Fn(&str) -> Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = non_empty(lookup, TIMEOUT_VAR) else {
        return Ok(DEFAULT_TIMEOUT);
    };

    let timeout = duration_str::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        var: TIMEOUT_VAR,
        reason: format!("{e}"),
    })?;

    if timeout.is_zero() {
        return Err(ConfigError::InvalidValue {
            var: TIMEOUT_VAR,
            reason: "timeout must be greater than zero".to_owned(),
        });
    }

    Ok(timeout)
}

fn parse_max_tokens(lookup: impl Fn(&str) -> Option<String>) -> Result<u32, ConfigError> {
    let Some(raw) = non_empty(lookup, SONNET_MAX_TOKENS_VAR) else {
        return Ok(DEFAULT_SONNET_MAX_TOKENS);
    };

    match raw.parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            var: SONNET_MAX_TOKENS_VAR,
            reason: "must be greater than 0".to_owned(),
        }),
        Ok(tokens) => Ok(tokens),
        Err(e) => Err(ConfigError::InvalidValue {
            var: SONNET_MAX_TOKENS_VAR,
            reason: e.to_string(),
        }),
    }
}
