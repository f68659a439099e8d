//! MCP server implementation for progdt
//!
//! Exposes the three stamps as Model Context Protocol tools, so an editor
//! assistant can ask for the current date or time in the user's preferred
//! format instead of guessing it.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use progdt_core::Progdt;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{McpResult, StampRequest};

/// MCP server for progdt
#[derive(Clone)]
pub struct ProgdtMcpServer {
    progdt: Arc<Progdt>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ProgdtMcpServer {
    /// Create a new progdt MCP server
    pub fn new(progdt: Progdt) -> Self {
        Self {
            progdt: Arc::new(progdt),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.progdt.clone())
    }

    #[tool(
        name = "date",
        description = "Current date as YYYY-MM-DD. Uses the user's 'utc' setting unless utc is given. Optionally format a specific instant with 'at' (RFC 3339 or epoch milliseconds)."
    )]
    async fn date(&self, params: Parameters<StampRequest>) -> McpResult {
        self.handlers().date(params)
    }

    #[tool(
        name = "time",
        description = "Current time as HH:MM:SS.FFF+HH:MM, with the local UTC offset or +00:00 in UTC mode. Uses the user's 'utc' setting unless utc is given. Optionally format a specific instant with 'at'."
    )]
    async fn time(&self, params: Parameters<StampRequest>) -> McpResult {
        self.handlers().time(params)
    }

    #[tool(
        name = "datetime",
        description = "Current date and time as YYYY-MM-DDTHH:MM:SS.FFF+HH:MM. Date and time are taken from the same instant. Uses the user's 'utc' setting unless utc is given. Optionally format a specific instant with 'at'."
    )]
    async fn datetime(&self, params: Parameters<StampRequest>) -> McpResult {
        self.handlers().datetime(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ProgdtMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "progdt".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"progdt produces ISO-8601 date and time stamps in the user's preferred format.

## Tools
- `date`: YYYY-MM-DD
- `time`: HH:MM:SS.FFF+HH:MM
- `datetime`: YYYY-MM-DDTHH:MM:SS.FFF+HH:MM

## Parameters
- `utc` (optional): true for UTC (offset +00:00), false for local time. When omitted the user's `utc` setting decides.
- `at` (optional): the instant to format, as RFC 3339 or Unix epoch milliseconds. Defaults to now.

Insert the returned text verbatim; do not reformat it."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ProgdtMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting progdt MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
