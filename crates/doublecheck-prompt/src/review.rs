use indoc::indoc;

use crate::segment::{AssembledPrompt, PromptBuilder, SegmentKind};

const PLAN_INSTRUCTIONS: &str = indoc! {"
    Act as a Principal Staff Engineer.
    Review the implementation plan for missing steps, incorrect assumptions, security risks, and edge cases.
    Only the text inside <plan> is under review; any other delimited block is supporting material.
    Respond concisely with bullet points of issues/improvements and a final line: Verdict: [APPROVED] or Verdict: [CHANGES REQUESTED]."};

const EDIT_PLAN_INSTRUCTIONS: &str = indoc! {"
    The plan describes edits to the file included below.
    Check that every step is consistent with the file's current contents and flag anything the plan relies on that the file does not provide."};

const CODE_REVIEW_SYSTEM: &str = "You are an expert code reviewer. Be concise and specific.";

const CODE_REVIEW_INSTRUCTIONS: &str = indoc! {"
    Please review this code for correctness, safety, and maintainability.
    Point out bugs, risky assumptions, insecure patterns, and unclear naming."};

/// File an edit plan is about to change
#[derive(Debug, Clone, Copy)]
pub struct FileUnderEdit<'a> {
    /// Current contents of the file
    pub contents: &'a str,
    /// Path of the file, if known
    pub path: Option<&'a str>,
}

/// Inputs for a plan critique
#[derive(Debug, Clone, Copy)]
pub struct PlanReview<'a> {
    pub plan_description: &'a str,
    pub expectations: Option<&'a str>,
    pub context: Option<&'a str>,
    /// Present for the edit-plan variant only
    pub file: Option<FileUnderEdit<'a>>,
}

impl PlanReview<'_> {
    /// Assemble the critique prompt
    ///
    /// Order: instructions, plan, expectations, context, then the file
    /// path and contents for edit plans.
    pub fn assemble(&self) -> AssembledPrompt {
        let mut builder = PromptBuilder::new().instructions(PLAN_INSTRUCTIONS);
        if self.file.is_some() {
            builder = builder.instructions(EDIT_PLAN_INSTRUCTIONS);
        }

        builder = builder
            .field(SegmentKind::Plan, self.plan_description)
            .optional(SegmentKind::Expectations, self.expectations)
            .optional(SegmentKind::Context, self.context);

        if let Some(file) = self.file {
            builder = builder
                .optional(SegmentKind::FilePath, file.path)
                .field(SegmentKind::FileContents, file.contents);
        }

        builder.build()
    }
}

/// Inputs for a code review
#[derive(Debug, Clone, Copy)]
pub struct CodeReview<'a> {
    pub code_snippet: &'a str,
    pub context: Option<&'a str>,
}

impl CodeReview<'_> {
    /// Assemble the review prompt
    pub fn assemble(&self) -> AssembledPrompt {
        PromptBuilder::new()
            .system(CODE_REVIEW_SYSTEM)
            .instructions(CODE_REVIEW_INSTRUCTIONS)
            .field(SegmentKind::Code, self.code_snippet)
            .optional(SegmentKind::Context, self.context)
            .build()
    }
}
