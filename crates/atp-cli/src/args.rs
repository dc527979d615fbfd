use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{JsonArgs, PlanArgs};

/// Inspect and validate Agent Task Protocol plans
///
/// Reads an `.atp.json` plan, checks it against the ATP v1.3 schema, and
/// either lists every defect found or renders the task graph. When no plan
/// path is given, `<root>/.atp.json` or the first `*.atp.json` file below
/// each search root is used.
#[derive(Parser)]
#[command(version, about, name = "atp")]
pub struct Args {
    /// Directory to search for a default plan. May be repeated; defaults to
    /// the current directory
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub roots: Vec<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the ATP CLI
///
/// Without a command, `show` runs against the default plan.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan and list every issue found
    #[command(alias = "c")]
    Check(PlanArgs),
    /// Render a plan's metadata and nodes
    #[command(alias = "s")]
    Show(PlanArgs),
    /// Print the validation result as a graphData JSON message
    Json(JsonArgs),
    /// List dependency edges and a dependencies-first node order
    #[command(alias = "g")]
    Graph(PlanArgs),
    /// Start the MCP server
    Serve,
}
