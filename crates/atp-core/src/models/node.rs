//! Node model definition.

use serde::{Deserialize, Serialize};

use super::NodeStatus;

/// One task in an ATP plan.
///
/// The node's identifier is the key it is stored under in
/// [`super::Plan::nodes`]; it is not repeated inside the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Brief title of the task
    pub title: String,

    /// What the worker is asked to do
    pub instruction: String,

    /// Additional background for the worker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Identifiers of the nodes this node depends on
    pub dependencies: Vec<String>,

    /// Current status of the node
    pub status: NodeStatus,

    /// Worker that claimed the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Files or other outputs produced by the worker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<String>>,

    /// Worker's report on what was done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}
