//! Shared types for the DoubleCheck tool server
//!
//! Defines the uniform outcome every tool call resolves to and the error
//! taxonomy that domain errors map onto before reaching the caller.

#![allow(clippy::must_use_candidate)]

mod error;
mod outcome;

pub use error::{ErrorCategory, ToolError};
pub use outcome::{Failure, ToolOutcome};
