//! Project-level metadata carried by every plan.

use serde::{Deserialize, Serialize};

use super::ProjectStatus;

/// The `meta` block of an ATP plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Human readable project name
    pub project_name: String,

    /// Schema version, always [`super::SCHEMA_VERSION`] once validated
    pub version: String,

    /// Optional creation timestamp, kept as written in the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Overall project state
    pub project_status: ProjectStatus,
}
