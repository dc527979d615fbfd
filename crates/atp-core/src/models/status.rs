//! Status enumerations for plans and nodes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a single node in an ATP plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeStatus {
    /// Waiting on dependencies
    Locked,

    /// All dependencies satisfied, available to claim
    Ready,

    /// Claimed by a worker
    Claimed,

    /// Finished successfully
    Completed,

    /// Finished unsuccessfully
    Failed,
}

impl NodeStatus {
    /// Every node status in canonical schema order.
    pub const ALL: [NodeStatus; 5] = [
        NodeStatus::Locked,
        NodeStatus::Ready,
        NodeStatus::Claimed,
        NodeStatus::Completed,
        NodeStatus::Failed,
    ];

    /// Wire representation as it appears in plan documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Locked => "LOCKED",
            NodeStatus::Ready => "READY",
            NodeStatus::Claimed => "CLAIMED",
            NodeStatus::Completed => "COMPLETED",
            NodeStatus::Failed => "FAILED",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atp_core::models::NodeStatus;
    ///
    /// assert_eq!(NodeStatus::Completed.with_icon(), "✓ COMPLETED");
    /// assert_eq!(NodeStatus::Claimed.with_icon(), "➤ CLAIMED");
    /// assert_eq!(NodeStatus::Locked.with_icon(), "□ LOCKED");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            NodeStatus::Locked => "□ LOCKED",
            NodeStatus::Ready => "○ READY",
            NodeStatus::Claimed => "➤ CLAIMED",
            NodeStatus::Completed => "✓ COMPLETED",
            NodeStatus::Failed => "✗ FAILED",
        }
    }
}

impl FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid node status: {s}"))
    }
}

/// Project-level state recorded in the plan's `meta` block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Draft,
    Active,
    Paused,
    Archived,
}

impl ProjectStatus {
    /// Every project status in canonical schema order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Draft,
        ProjectStatus::Active,
        ProjectStatus::Paused,
        ProjectStatus::Archived,
    ];

    /// Wire representation as it appears in plan documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Paused => "PAUSED",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid project status: {s}"))
    }
}
