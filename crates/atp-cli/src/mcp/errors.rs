//! Error handling utilities for MCP server

use atp_core::AtpError;
use rmcp::ErrorData;
use thiserror::Error;

/// Failures while loading a plan on behalf of a tool call
#[derive(Error, Debug)]
pub enum LoadError {
    /// Plan discovery failed
    #[error("{0}")]
    Locate(AtpError),
    /// JSON encoding of the result failed
    #[error("{0}")]
    Encode(AtpError),
    /// The blocking load task panicked or was cancelled
    #[error("load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Helper to convert load errors to MCP errors
pub fn to_mcp_error(message: &str, error: &LoadError) -> ErrorData {
    ErrorData::internal_error(format!("{}: {}", message, error), None)
}
