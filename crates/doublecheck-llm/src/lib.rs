//! Provider adapters for DoubleCheck
//!
//! Each adapter turns an assembled prompt into a single non-streaming call
//! against a hosted model API and normalizes the reply, or the failure,
//! into a uniform outcome.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod protocol;
pub mod provider;

pub use error::LlmError;
pub use provider::anthropic::AnthropicProvider;
pub use provider::google::GoogleProvider;
pub use provider::Provider;
