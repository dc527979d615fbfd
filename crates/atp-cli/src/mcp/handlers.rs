//! MCP tool handlers implementation

use std::sync::Arc;

use atp_core::{
    display::{CheckResult, FailureReport},
    params as core, LoadedPlan, PlanLocator,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::task;

use super::errors::{to_mcp_error, LoadError};

/// Generic MCP wrapper for core parameter types
///
/// Adds JSON deserialization and schema generation through a transparent
/// serde container so the core types stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type PlanPath = McpParams<core::PlanPath>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    locator: Arc<PlanLocator>,
}

impl McpHandlers {
    pub fn new(locator: Arc<PlanLocator>) -> Self {
        Self { locator }
    }

    /// Plan discovery and file reads block, so they run off the async
    /// executor.
    async fn load(&self, params: &PlanPath) -> Result<LoadedPlan, ErrorData> {
        let locator = Arc::clone(&self.locator);
        let path = params.as_ref().path.clone();

        task::spawn_blocking(move || {
            locator.load(path.as_deref()).map_err(LoadError::Locate)
        })
        .await
        .map_err(LoadError::Join)
        .and_then(|result| result)
        .map_err(|e| to_mcp_error("Failed to load ATP plan", &e))
    }

    pub async fn validate_plan(&self, Parameters(params): Parameters<PlanPath>) -> McpResult {
        debug!("validate_plan: {:?}", params);

        let loaded = self.load(&params).await?;
        let source = loaded.path.as_ref().map(|p| p.display().to_string());
        let mut check = CheckResult::new(&loaded.result);
        if let Some(source) = source.as_deref() {
            check = check.with_source(source);
        }

        Ok(CallToolResult::success(vec![Content::text(check.to_string())]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<PlanPath>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let loaded = self.load(&params).await?;
        let text = match &loaded.result {
            Ok(plan) => plan.to_string(),
            Err(failure) => FailureReport(failure).to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub async fn plan_json(&self, Parameters(params): Parameters<PlanPath>) -> McpResult {
        debug!("plan_json: {:?}", params);

        let message = self.load(&params).await?.into_message();
        let json = message
            .to_json()
            .map_err(|e| to_mcp_error("Failed to encode ATP plan", &LoadError::Encode(e)))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}
