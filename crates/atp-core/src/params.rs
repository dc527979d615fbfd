//! Parameter structures shared by the CLI and MCP interfaces.
//!
//! These stay free of interface-specific derives: the CLI wraps them with
//! clap arguments, the MCP server with a transparent serde wrapper. JSON
//! schema generation is enabled with the `schema` feature.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Selects a plan file. When `path` is absent the default plan is located
/// from the configured search roots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlanPath {
    /// Path to an `.atp.json` plan file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl PlanPath {
    pub fn as_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl From<Option<PathBuf>> for PlanPath {
    fn from(path: Option<PathBuf>) -> Self {
        PlanPath { path }
    }
}
