//! ATP CLI Application
//!
//! Command-line interface for validating and inspecting Agent Task
//! Protocol plans, with an MCP server mode for AI tooling.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atp_core::{PlanLocator, PlanPath};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, AtpMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { roots, no_color, command } = Args::parse();

    let locator = PlanLocator::new().with_roots(roots);
    let renderer = TerminalRenderer::new(!no_color);

    info!("ATP started");

    match command {
        Some(Check(args)) => Cli::new(locator, renderer).check(args.into()),
        Some(Show(args)) => Cli::new(locator, renderer).show(args.into()),
        Some(Json(args)) => Cli::new(locator, renderer).json(args.plan.into(), args.pretty),
        Some(Graph(args)) => Cli::new(locator, renderer).graph(args.into()),
        Some(Serve) => {
            info!("Starting ATP MCP server");
            run_stdio_server(AtpMcpServer::new(locator))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(locator, renderer).show(PlanPath::default()),
    }
}
