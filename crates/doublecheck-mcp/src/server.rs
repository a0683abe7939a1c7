use std::sync::Arc;

use doublecheck_core::ToolOutcome;
use indoc::indoc;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use crate::dispatcher::ToolDispatcher;
use crate::error::McpError;
use crate::tools::ToolKind;

const INSTRUCTIONS: &str = indoc! {"
    Second-opinion reviews from hosted models.
    Use gemini_plan_check to critique an implementation plan,
    gemini_edit_plan_check to critique a plan for editing one file,
    and sonnet_code_review to review a code snippet.
"};

/// MCP server exposing the review tools over a single session
#[derive(Clone)]
pub struct DoubleCheckServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl DoubleCheckServer {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Run one tool call and shape the reply for the protocol
    pub async fn handle_call(&self, request: CallToolRequestParam) -> Result<CallToolResult, ErrorData> {
        let outcome = self
            .dispatcher
            .call(&request.name, request.arguments)
            .await
            .map_err(|e| match e {
                McpError::ToolNotFound { .. } => {
                    tracing::warn!(tool = %request.name, "unknown tool requested");
                    ErrorData::invalid_params(e.to_string(), None)
                }
            })?;

        Ok(to_call_result(&outcome))
    }
}

/// Failures keep the protocol error flag set alongside the prefixed text
fn to_call_result(outcome: &ToolOutcome) -> CallToolResult {
    let content = vec![Content::text(outcome.to_text())];

    if outcome.is_success() {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}

impl ServerHandler for DoubleCheckServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_owned()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: ToolKind::definitions(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.handle_call(request).await
    }
}
