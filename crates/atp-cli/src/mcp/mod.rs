//! MCP server implementation for ATP
//!
//! Exposes plan validation to AI models over the Model Context Protocol.
//! Tools take an optional plan path; without one the server's search roots
//! are used to find the default plan, exactly as the CLI does.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use atp_core::PlanLocator;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{McpResult, PlanPath};

/// MCP server for ATP plans
#[derive(Clone)]
pub struct AtpMcpServer {
    locator: Arc<PlanLocator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AtpMcpServer {
    /// Create a new ATP MCP server
    pub fn new(locator: PlanLocator) -> Self {
        Self {
            locator: Arc::new(locator),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.locator))
    }

    #[tool(
        name = "validate_plan",
        description = "Validate an ATP v1.3 plan file. Optionally pass `path`; otherwise the default plan (.atp.json at the workspace root, or the first *.atp.json found) is used. Returns either a success line with node and dependency counts, or the failure category followed by every issue found."
    )]
    async fn validate_plan(&self, params: Parameters<PlanPath>) -> McpResult {
        self.handlers().validate_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Render an ATP plan as markdown: project metadata, a progress summary, and every node with its status, instruction, context, dependencies, dependents, worker, timestamps, artifacts and report. Invalid plans return the list of validation issues instead."
    )]
    async fn show_plan(&self, params: Parameters<PlanPath>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "plan_json",
        description = "Return the validation result as a graphData JSON message: {\"type\":\"graphData\",\"planUri\":...,\"result\":{\"success\":true,\"graph\":...}} for valid plans, or {\"success\":false,\"error\":...,\"issues\":[...]} otherwise."
    )]
    async fn plan_json(&self, params: Parameters<PlanPath>) -> McpResult {
        self.handlers().plan_json(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AtpMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "atp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"ATP validates Agent Task Protocol (v1.3) plans: JSON documents describing a graph of tasks (nodes) with dependencies, statuses and work results.

## Tools
- `validate_plan`: check a plan and list every defect found
- `show_plan`: read a plan's metadata and nodes as markdown
- `plan_json`: get the machine-readable validation result

## Node statuses
LOCKED, READY, CLAIMED, COMPLETED, FAILED. A dependency edge is active while its target node is CLAIMED.

All tools accept an optional `path`. Without it, `.atp.json` in the search root is used, falling back to the first `*.atp.json` file below it (node_modules and .git are skipped)."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: AtpMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting ATP MCP server on stdio");
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
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
