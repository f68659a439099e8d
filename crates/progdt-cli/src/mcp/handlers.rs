//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use progdt_core::{params as core, CommandKind, Progdt};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};

use super::errors::to_mcp_error;

/// Parameters accepted by every stamp tool
pub type StampRequest = core::StampRequest;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    progdt: Arc<Progdt>,
}

impl McpHandlers {
    pub fn new(progdt: Arc<Progdt>) -> Self {
        Self { progdt }
    }

    /// Renders one stamp and returns it as the tool's only text content.
    pub fn render(&self, kind: CommandKind, params: &StampRequest) -> McpResult {
        debug!("{kind}: {params:?}");

        let text = self
            .progdt
            .render(kind, params)
            .map_err(|e| to_mcp_error(&format!("Failed to render {}", kind.as_str()), &e))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub fn date(&self, Parameters(params): Parameters<StampRequest>) -> McpResult {
        self.render(CommandKind::Date, &params)
    }

    pub fn time(&self, Parameters(params): Parameters<StampRequest>) -> McpResult {
        self.render(CommandKind::Time, &params)
    }

    pub fn datetime(&self, Parameters(params): Parameters<StampRequest>) -> McpResult {
        self.render(CommandKind::DateTime, &params)
    }
}
