//! Tool registry: names, argument types and schemas

use std::sync::Arc;

use doublecheck_prompt::{AssembledPrompt, CodeReview, FileUnderEdit, PlanReview};
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::arguments::Arguments;
use crate::error::ValidationError;

/// The registered review tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ToolKind {
    /// Plan critique by Gemini
    GeminiPlanCheck,
    /// Plan critique by Gemini against the file being edited
    GeminiEditPlanCheck,
    /// Code review by Claude Sonnet
    SonnetCodeReview,
}

/// Which provider serves a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PlanCritic,
    CodeReviewer,
}

impl ToolKind {
    pub const fn route(self) -> Route {
        match self {
            Self::GeminiPlanCheck | Self::GeminiEditPlanCheck => Route::PlanCritic,
            Self::SonnetCodeReview => Route::CodeReviewer,
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::GeminiPlanCheck => {
                "Ask Gemini to critique an implementation plan for correctness, risks, and gaps. \
                 Returns bullet-point findings and a final verdict line."
            }
            Self::GeminiEditPlanCheck => {
                "Ask Gemini to critique a plan that edits a specific file, checking each step \
                 against the file's current contents. Returns findings and a final verdict line."
            }
            Self::SonnetCodeReview => {
                "Ask Claude Sonnet to review a code snippet for bugs, security issues, and readability."
            }
        }
    }

    fn input_schema(self) -> Arc<JsonObject> {
        let schema = match self {
            Self::GeminiPlanCheck => schemars::schema_for!(PlanCheckArgs),
            Self::GeminiEditPlanCheck => schemars::schema_for!(EditPlanCheckArgs),
            Self::SonnetCodeReview => schemars::schema_for!(CodeReviewArgs),
        };

        let mut object = match serde_json::to_value(schema) {
            Ok(Value::Object(object)) => object,
            _ => JsonObject::new(),
        };
        object.remove("$schema");
        object.insert("type".to_owned(), Value::String("object".to_owned()));

        Arc::new(object)
    }

    /// MCP tool definition advertised in `tools/list`
    pub fn definition(self) -> Tool {
        let name: &'static str = self.into();
        Tool::new(name, self.description(), self.input_schema())
    }

    /// Definitions for every registered tool
    pub fn definitions() -> Vec<Tool> {
        Self::iter().map(Self::definition).collect()
    }
}

/// Arguments of `gemini_plan_check`
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct PlanCheckArgs {
    /// The implementation plan to critique
    pub plan_description: String,
    /// Specific concerns or constraints the reviewer should keep in mind
    pub expectations: Option<String>,
    /// Supporting background; long values are cut to the first 6000 characters
    pub context: Option<String>,
}

/// Arguments of `gemini_edit_plan_check`
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct EditPlanCheckArgs {
    /// The edit plan to critique
    pub plan_description: String,
    /// Current contents of the file the plan edits; cut to the first 20000 characters
    pub file_contents: String,
    /// Path of the file the plan edits
    pub file_path: Option<String>,
    /// Specific concerns or constraints the reviewer should keep in mind
    pub expectations: Option<String>,
    /// Supporting background; long values are cut to the first 6000 characters
    pub context: Option<String>,
}

/// Arguments of `sonnet_code_review`
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct CodeReviewArgs {
    /// The code to review
    pub code_snippet: String,
    /// Supporting background; long values are cut to the first 6000 characters
    pub context: Option<String>,
}

/// A validated tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    PlanCheck(PlanCheckArgs),
    EditPlanCheck(EditPlanCheckArgs),
    CodeReview(CodeReviewArgs),
}

impl ToolRequest {
    /// Validate raw arguments for the given tool
    ///
    /// Required fields are checked before optional ones so a missing primary
    /// field is always the reported error.
    pub fn parse(tool: ToolKind, arguments: Option<JsonObject>) -> Result<Self, ValidationError> {
        let mut args = Arguments::new(arguments);

        let request = match tool {
            ToolKind::GeminiPlanCheck => {
                let plan_description = args.required("plan_description")?;
                Self::PlanCheck(PlanCheckArgs {
                    plan_description,
                    expectations: args.optional("expectations")?,
                    context: args.optional("context")?,
                })
            }
            ToolKind::GeminiEditPlanCheck => {
                let plan_description = args.required("plan_description")?;
                // An empty file is a valid edit target
                let file_contents = args.required_text("file_contents")?;
                Self::EditPlanCheck(EditPlanCheckArgs {
                    plan_description,
                    file_contents,
                    file_path: args.optional("file_path")?,
                    expectations: args.optional("expectations")?,
                    context: args.optional("context")?,
                })
            }
            ToolKind::SonnetCodeReview => {
                let code_snippet = args.required("code_snippet")?;
                Self::CodeReview(CodeReviewArgs {
                    code_snippet,
                    context: args.optional("context")?,
                })
            }
        };

        for name in args.leftover() {
            tracing::debug!(tool = %tool, argument = name, "ignoring unknown argument");
        }

        Ok(request)
    }

    /// Build the provider prompt for this call
    pub fn assemble(&self) -> AssembledPrompt {
        match self {
            Self::PlanCheck(args) => PlanReview {
                plan_description: &args.plan_description,
                expectations: args.expectations.as_deref(),
                context: args.context.as_deref(),
                file: None,
            }
            .assemble(),
            Self::EditPlanCheck(args) => PlanReview {
                plan_description: &args.plan_description,
                expectations: args.expectations.as_deref(),
                context: args.context.as_deref(),
                file: Some(FileUnderEdit {
                    contents: &args.file_contents,
                    path: args.file_path.as_deref(),
                }),
            }
            .assemble(),
            Self::CodeReview(args) => CodeReview {
                code_snippet: &args.code_snippet,
                context: args.context.as_deref(),
            }
            .assemble(),
        }
    }
}
