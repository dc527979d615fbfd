//! Display wrappers for collections: status summaries, issue lists, edges.

use std::fmt;

use crate::{
    error::ValidationFailure,
    graph::{Edge, PlanGraph},
    models::NodeStatus,
};

/// One-line count of nodes per status, e.g.
/// `Progress: 1/3 completed (□ LOCKED: 1, ○ READY: 1, ✓ COMPLETED: 1)`.
///
/// Statuses without nodes are omitted from the parenthesized list.
pub struct StatusSummary<'a, 'g> {
    graph: &'g PlanGraph<'a>,
}

impl<'a, 'g> StatusSummary<'a, 'g> {
    pub fn new(graph: &'g PlanGraph<'a>) -> Self {
        Self { graph }
    }
}

impl fmt::Display for StatusSummary<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.graph.status_counts();
        let completed = counts
            .iter()
            .find(|(status, _)| *status == NodeStatus::Completed)
            .map_or(0, |(_, count)| *count);

        let parts: Vec<String> = counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| format!("{}: {count}", status.with_icon()))
            .collect();

        write!(
            f,
            "Progress: {completed}/{} completed ({})",
            self.graph.plan().len(),
            parts.join(", ")
        )
    }
}

/// A validation failure as a markdown heading and one bullet per issue.
pub struct FailureReport<'a>(pub &'a ValidationFailure);

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.0.category())?;
        writeln!(f)?;

        if self.0.issues.is_empty() {
            writeln!(f, "No issues reported.")?;
            return Ok(());
        }

        for issue in &self.0.issues {
            writeln!(f, "- {issue}")?;
        }

        Ok(())
    }
}

/// Edge list, one `source -> target` bullet per dependency.
pub struct Edges<'a, 'e>(pub &'e [Edge<'a>]);

impl fmt::Display for Edges<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No dependencies.");
        }

        for edge in self.0 {
            let marker = if edge.active { " (active)" } else { "" };
            writeln!(f, "- {} -> {}{marker}", edge.source, edge.target)?;
        }

        Ok(())
    }
}
