//! Configuration for tests, resolved through the real environment loader

use std::collections::HashMap;
use std::sync::Arc;

use doublecheck_config::{
    ANTHROPIC_API_KEY_VAR, ANTHROPIC_BASE_URL_VAR, Config, ConfigError, GEMINI_BASE_URL_VAR, GEMINI_MODEL_VAR,
    GOOGLE_API_KEY_VAR, SONNET_MODEL_VAR, TIMEOUT_VAR,
};
use doublecheck_llm::{AnthropicProvider, GoogleProvider};
use doublecheck_mcp::ToolDispatcher;

pub const GOOGLE_KEY: &str = "test-google-key-4f9a";
pub const ANTHROPIC_KEY: &str = "test-anthropic-key-c21e";
pub const GEMINI_MODEL: &str = "models/gemini-test";
pub const SONNET_MODEL: &str = "claude-test";

/// Builder over the variables the loader reads
pub struct ConfigBuilder {
    vars: HashMap<&'static str, String>,
}

impl ConfigBuilder {
    /// Credentials and models set; base URLs left at their defaults
    pub fn new() -> Self {
        let vars = HashMap::from([
            (GOOGLE_API_KEY_VAR, GOOGLE_KEY.to_owned()),
            (ANTHROPIC_API_KEY_VAR, ANTHROPIC_KEY.to_owned()),
            (GEMINI_MODEL_VAR, GEMINI_MODEL.to_owned()),
            (SONNET_MODEL_VAR, SONNET_MODEL.to_owned()),
            (TIMEOUT_VAR, "5s".to_owned()),
        ]);
        Self { vars }
    }

    pub fn gemini_base_url(self, url: &str) -> Self {
        self.var(GEMINI_BASE_URL_VAR, url)
    }

    pub fn anthropic_base_url(self, url: &str) -> Self {
        self.var(ANTHROPIC_BASE_URL_VAR, url)
    }

    pub fn timeout(self, timeout: &str) -> Self {
        self.var(TIMEOUT_VAR, timeout)
    }

    pub fn var(mut self, name: &'static str, value: &str) -> Self {
        self.vars.insert(name, value.to_owned());
        self
    }

    pub fn try_build(&self) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| self.vars.get(name).cloned())
    }

    pub fn build(&self) -> Config {
        self.try_build().expect("valid test configuration")
    }

    /// Dispatcher wired to the real HTTP adapters
    pub fn dispatcher(&self) -> ToolDispatcher {
        let config = self.build();
        let google = GoogleProvider::new(&config.gemini, config.request_timeout).expect("google provider");
        let anthropic = AnthropicProvider::new(&config.sonnet, config.request_timeout, config.sonnet_max_tokens)
            .expect("anthropic provider");

        ToolDispatcher::new(Arc::new(google), Arc::new(anthropic))
    }
}
