//! Command handlers for the ATP CLI.
//!
//! Argument structs wrap the core parameter types with clap derives and
//! convert into them explicitly, keeping clap out of `atp-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Loader + Validator → Display
//! ```
//!
//! Every command loads its plan through the same [`PlanLocator`], so an
//! omitted path resolves identically everywhere.

use std::{fmt::Write as _, path::PathBuf};

use anyhow::{Context, Result};
use atp_core::{
    display::{CheckResult, Edges, FailureReport},
    LoadedPlan, PlanGraph, PlanLocator, PlanPath,
};
use clap::Args;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Select a plan file
#[derive(Args)]
pub struct PlanArgs {
    /// Path to an .atp.json plan; the default plan is used when omitted
    #[arg(help = "Path to an .atp.json plan (defaults to the plan found under --root)")]
    pub path: Option<PathBuf>,
}

impl From<PlanArgs> for PlanPath {
    fn from(val: PlanArgs) -> Self {
        PlanPath::from(val.path)
    }
}

/// Print the validation result as JSON
#[derive(Args)]
pub struct JsonArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Pretty-print the JSON output
    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,
}

/// Executes CLI commands against plans found by a locator.
pub struct Cli {
    locator: PlanLocator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(locator: PlanLocator, renderer: TerminalRenderer) -> Self {
        Self { locator, renderer }
    }

    fn load(&self, params: &PlanPath) -> Result<LoadedPlan> {
        let loaded = self
            .locator
            .load(params.as_path())
            .context("Failed to locate ATP plan")?;
        debug!(
            "loaded {:?}: {}",
            loaded.path,
            if loaded.result.is_ok() { "valid" } else { "invalid" }
        );
        Ok(loaded)
    }

    /// Validate a plan; fails the process when the plan is invalid.
    pub fn check(&self, params: PlanPath) -> Result<()> {
        let loaded = self.load(&params)?;
        let source = loaded.path.as_ref().map(|p| p.display().to_string());

        let mut check = CheckResult::new(&loaded.result);
        if let Some(source) = source.as_deref() {
            check = check.with_source(source);
        }

        match &loaded.result {
            Ok(_) => self.renderer.render(&check.to_string()),
            Err(failure) => {
                self.renderer.render_failure(&check.to_string())?;
                Err(failure.clone().into())
            }
        }
    }

    /// Render a plan as markdown.
    pub fn show(&self, params: PlanPath) -> Result<()> {
        let loaded = self.load(&params)?;
        match &loaded.result {
            Ok(plan) => self.renderer.render(&plan.to_string()),
            Err(failure) => {
                self.renderer
                    .render_failure(&FailureReport(failure).to_string())?;
                Err(failure.clone().into())
            }
        }
    }

    /// Print the `graphData` message. Invalid plans are part of the payload,
    /// not an error.
    pub fn json(&self, params: PlanPath, pretty: bool) -> Result<()> {
        let message = self.load(&params)?.into_message();
        let output = if pretty {
            message.to_json_pretty()
        } else {
            message.to_json()
        }
        .context("Failed to encode ATP plan as JSON")?;

        println!("{output}");
        Ok(())
    }

    /// List edges and a dependencies-first order.
    pub fn graph(&self, params: PlanPath) -> Result<()> {
        let loaded = self.load(&params)?;
        let plan = match &loaded.result {
            Ok(plan) => plan,
            Err(failure) => {
                self.renderer
                    .render_failure(&FailureReport(failure).to_string())?;
                return Err(failure.clone().into());
            }
        };

        let graph = PlanGraph::new(plan);
        let mut output = String::new();
        writeln!(output, "# Dependencies")?;
        writeln!(output)?;
        write!(output, "{}", Edges(&graph.edges()))?;
        writeln!(output)?;
        writeln!(output, "## Order")?;
        writeln!(output)?;
        match graph.topological_order() {
            Some(order) => {
                for (position, id) in order.iter().enumerate() {
                    writeln!(output, "{}. {id}", position + 1)?;
                }
            }
            None => writeln!(
                output,
                "The dependency graph contains a cycle; no order exists."
            )?,
        }

        self.renderer.render(&output)
    }
}
