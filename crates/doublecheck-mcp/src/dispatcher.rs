use std::sync::Arc;

use doublecheck_core::ToolOutcome;
use doublecheck_llm::Provider;
use rmcp::model::JsonObject;

use crate::error::McpError;
use crate::tools::{Route, ToolKind, ToolRequest};

/// Routes validated tool calls to their provider
///
/// Holds no mutable state; concurrent calls share only the providers.
#[derive(Clone)]
pub struct ToolDispatcher {
    plan_critic: Arc<dyn Provider>,
    code_reviewer: Arc<dyn Provider>,
}

impl ToolDispatcher {
    pub fn new(plan_critic: Arc<dyn Provider>, code_reviewer: Arc<dyn Provider>) -> Self {
        Self {
            plan_critic,
            code_reviewer,
        }
    }

    /// Handle a call by tool name
    ///
    /// # Errors
    ///
    /// Returns `McpError::ToolNotFound` for names outside the registry.
    /// Every other failure is reported through the returned outcome.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> Result<ToolOutcome, McpError> {
        let tool = name
            .parse::<ToolKind>()
            .map_err(|_| McpError::ToolNotFound { tool: name.to_owned() })?;

        Ok(self.dispatch(tool, arguments).await)
    }

    /// Validate, assemble and run one tool call
    pub async fn dispatch(&self, tool: ToolKind, arguments: Option<JsonObject>) -> ToolOutcome {
        let request = match ToolRequest::parse(tool, arguments) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(tool = %tool, error = %e, "rejected tool call");
                return ToolOutcome::from_error(&e);
            }
        };

        let prompt = request.assemble();
        let provider = self.provider(tool.route());

        tracing::info!(
            tool = %tool,
            provider = provider.name(),
            model = provider.model(),
            segments = prompt.segments().len(),
            "dispatching tool call"
        );

        let outcome = provider.review(&prompt).await;

        if let Some(failure) = outcome.failure() {
            tracing::debug!(tool = %tool, error_type = %failure.error_type, "tool call failed");
        }

        outcome
    }

    fn provider(&self, route: Route) -> &dyn Provider {
        match route {
            Route::PlanCritic => self.plan_critic.as_ref(),
            Route::CodeReviewer => self.code_reviewer.as_ref(),
        }
    }
}
