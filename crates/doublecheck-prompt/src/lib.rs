//! Prompt assembly for DoubleCheck reviews
//!
//! Prompts are built as an ordered list of typed segments. Each segment
//! derived from a caller field carries its own delimiter pair, and optional
//! fields are cut to a fixed character budget before inclusion, so the
//! delimiting and truncation rules can be checked independently of any
//! provider.

#![allow(clippy::must_use_candidate)]

mod review;
mod segment;
mod truncate;

pub use review::{CodeReview, FileUnderEdit, PlanReview};
pub use segment::{AssembledPrompt, PromptBuilder, Segment, SegmentKind};
pub use truncate::truncate_chars;

/// Character budget for the `context` field
pub const CONTEXT_MAX_CHARS: usize = 6000;
/// Character budget for the `expectations` field
pub const EXPECTATIONS_MAX_CHARS: usize = 6000;
/// Character budget for the `file_contents` field
pub const FILE_CONTENTS_MAX_CHARS: usize = 20_000;
/// Character budget for the `file_path` field
pub const FILE_PATH_MAX_CHARS: usize = 1024;
