//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer and
//! returned verbatim by the MCP server.

use std::fmt;

use super::{
    collections::StatusSummary,
    datetime::{elapsed, LocalDateTime},
};
use crate::{
    graph::PlanGraph,
    models::{Node, NodeStatus, Plan, ProjectStatus},
};

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = PlanGraph::new(self);

        writeln!(f, "# {}", self.meta.project_name)?;
        writeln!(f)?;

        writeln!(f, "- Version: {}", self.meta.version)?;
        writeln!(f, "- Status: {}", self.meta.project_status)?;
        if let Some(created) = &self.meta.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created))?;
        }
        writeln!(f, "- Nodes: {}", self.len())?;

        if self.is_empty() {
            writeln!(f, "\nNo nodes in this plan.")?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{}", StatusSummary::new(&graph))?;
        writeln!(f, "\n## Nodes")?;
        writeln!(f)?;
        for (id, node) in &self.nodes {
            write!(f, "{}", NodeView::new(id, node, graph.dependents_of(id)))?;
        }

        Ok(())
    }
}

/// A node together with its identifier and the nodes depending on it.
pub struct NodeView<'a> {
    id: &'a str,
    node: &'a Node,
    dependents: &'a [&'a str],
}

impl<'a> NodeView<'a> {
    pub fn new(id: &'a str, node: &'a Node, dependents: &'a [&'a str]) -> Self {
        Self {
            id,
            node,
            dependents,
        }
    }
}

impl<'a> fmt::Display for NodeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;

        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            node.title,
            node.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", node.instruction)?;
        writeln!(f)?;

        if let Some(context) = &node.context {
            writeln!(f, "#### Context")?;
            writeln!(f)?;
            writeln!(f, "{context}")?;
            writeln!(f)?;
        }

        if !node.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", node.dependencies.join(", "))?;
        }
        if !self.dependents.is_empty() {
            writeln!(f, "- Required by: {}", self.dependents.join(", "))?;
        }
        if let Some(worker) = &node.worker_id {
            writeln!(f, "- Worker: {worker}")?;
        }
        if let Some(started) = &node.started_at {
            writeln!(f, "- Started: {}", LocalDateTime(started))?;
        }
        if let Some(completed) = &node.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        if let (Some(started), Some(completed)) = (&node.started_at, &node.completed_at) {
            if let Some(duration) = elapsed(started, completed) {
                writeln!(f, "- Duration: {duration}")?;
            }
        }

        if let Some(artifacts) = node.artifacts.as_ref().filter(|a| !a.is_empty()) {
            writeln!(f)?;
            writeln!(f, "#### Artifacts")?;
            writeln!(f)?;
            for artifact in artifacts {
                writeln!(f, "- {artifact}")?;
            }
        }

        if let Some(report) = &node.report {
            writeln!(f)?;
            writeln!(f, "#### Report")?;
            writeln!(f)?;
            writeln!(f, "{report}")?;
        }

        writeln!(f)
    }
}
