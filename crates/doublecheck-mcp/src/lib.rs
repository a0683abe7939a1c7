//! MCP surface for DoubleCheck
//!
//! Registers the review tools, validates their arguments, and routes each
//! call to the prompt assembler and provider adapter that own it.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod arguments;
pub mod dispatcher;
pub mod error;
pub mod server;
pub mod tools;

pub use dispatcher::ToolDispatcher;
pub use error::{McpError, ValidationError};
pub use server::DoubleCheckServer;
pub use tools::ToolKind;
