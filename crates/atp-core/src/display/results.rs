//! Display wrapper for the outcome of a validation run.

use std::fmt;

use super::collections::FailureReport;
use crate::{error::ValidationFailure, models::Plan};

/// Formats a validation outcome: a one-line confirmation on success, the
/// full issue list on failure.
pub struct CheckResult<'a> {
    source: Option<&'a str>,
    result: &'a Result<Plan, ValidationFailure>,
}

impl<'a> CheckResult<'a> {
    pub fn new(result: &'a Result<Plan, ValidationFailure>) -> Self {
        Self {
            source: None,
            result,
        }
    }

    /// Name the file the plan came from in the confirmation line.
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }
}

impl fmt::Display for CheckResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(plan) => {
                let edges: usize = plan.nodes.values().map(|n| n.dependencies.len()).sum();
                let subject = self.source.unwrap_or("Plan");
                writeln!(
                    f,
                    "Success: {subject} is a valid ATP plan ({} nodes, {edges} dependencies)",
                    plan.len()
                )
            }
            Err(failure) => write!(f, "{}", FailureReport(failure)),
        }
    }
}
