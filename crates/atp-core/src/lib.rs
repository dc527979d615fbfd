//! Core library for inspecting Agent Task Protocol (ATP) plans.
//!
//! An ATP plan is a JSON document describing a DAG of tasks: project
//! metadata plus a map of nodes, each with a status and a list of the nodes
//! it depends on. This crate decides whether untrusted text is a well-formed
//! v1.3 plan, reports every defect when it is not, and otherwise hands back a
//! typed [`Plan`] whose dependency references are known to resolve.
//!
//! # Modules
//!
//! - [`schema`]: the validator, `text -> Result<Plan, ValidationFailure>`
//! - [`models`]: the typed plan
//! - [`graph`]: read-only adjacency views over a validated plan
//! - [`loader`]: reading plan files and locating the default plan
//! - [`report`]: the JSON shapes sent to a presentation layer
//! - [`display`]: markdown formatting for the terminal and MCP
//!
//! # Quick Start
//!
//! ```rust
//! use atp_core::{schema::validate, PlanGraph};
//!
//! let raw = r#"{
//!     "meta": { "project_name": "Release", "version": "1.3", "project_status": "ACTIVE" },
//!     "nodes": {
//!         "build": { "title": "Build", "instruction": "Compile", "dependencies": [], "status": "COMPLETED" },
//!         "ship": { "title": "Ship", "instruction": "Upload", "dependencies": ["build"], "status": "READY" }
//!     }
//! }"#;
//!
//! let plan = validate(raw)?;
//! let graph = PlanGraph::new(&plan);
//! assert_eq!(graph.dependents_of("build"), ["ship"]);
//! # Ok::<(), atp_core::ValidationFailure>(())
//! ```

pub mod display;
pub mod error;
pub mod graph;
pub mod loader;
pub mod models;
pub mod params;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use display::{CheckResult, Edges, FailureReport, NodeView, StatusSummary};
pub use error::{AtpError, FailureKind, Result, ValidationFailure};
pub use graph::{Edge, PlanGraph};
pub use loader::{load_plan, LoadedPlan, PlanLocator, PLAN_FILE_SUFFIX};
pub use models::{Meta, Node, NodeStatus, Plan, ProjectStatus, SCHEMA_VERSION};
pub use params::PlanPath;
pub use report::{GraphMessage, ParseReport};
pub use schema::{validate, validate_value};
