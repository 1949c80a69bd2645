//! MCP front end: exposes the dispatcher over the rmcp server handler.

use crate::tools::{ToolDispatcher, ToolOutput};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
        Implementation, ListPromptsResult, ListToolsResult, PaginatedRequestParam, Prompt,
        PromptMessage, PromptMessageRole, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData, RoleServer, ServerHandler,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

pub const SERVER_NAME: &str = "pixeldojo-mcp";

const INSTRUCTIONS: &str = "Generate images with PixelDojo AI. Use pixeldojo_describe_models to \
compare models and their credit cost, pixeldojo_get_credits to check the balance, and \
pixeldojo_generate_image to create images. Image URLs expire after 24 hours.";

#[derive(Clone)]
pub struct PixelDojoServer {
    dispatcher: ToolDispatcher,
}

impl PixelDojoServer {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn tools(&self) -> Result<Vec<Tool>, ErrorData> {
        self.dispatcher
            .list_tools()
            .iter()
            .map(|tool| to_wire(tool))
            .collect()
    }

    pub fn prompts(&self) -> Result<Vec<Prompt>, ErrorData> {
        self.dispatcher
            .list_prompts()
            .iter()
            .map(|prompt| to_wire(prompt))
            .collect()
    }
}

/// Descriptors are already in MCP wire shape, so rmcp's own types are read
/// back from their JSON form.
fn to_wire<S: Serialize, T: DeserializeOwned>(value: &S) -> Result<T, ErrorData> {
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|e| ErrorData::internal_error(format!("Invalid descriptor: {}", e), None))
}

fn tool_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for PixelDojoServer {
    fn get_info(&self) -> ServerInfo {
        let server_info: Implementation = to_wire(&json!({
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        }))
        .unwrap_or_default();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()?))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        log::info!("Tool call: {}", request.name);
        let output = self.dispatcher.call_tool(&request.name, &arguments).await;
        Ok(tool_result(output))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(self.prompts()?))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        let text = self.dispatcher.get_prompt(&request.name, &arguments);
        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
