//! Plan model definition and related functionality.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Meta, Node};

/// A complete, validated ATP plan.
///
/// Values of this type are only produced by [`crate::schema::validate`], so
/// every dependency identifier is guaranteed to be a key of `nodes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Project-level metadata
    pub meta: Meta,

    /// Nodes keyed by identifier, in document order
    pub nodes: IndexMap<String, Node>,
}

impl Plan {
    /// Look up a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes in the plan.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
