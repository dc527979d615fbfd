//! Display formatting for plans, nodes, and validation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! context-specific output goes through small wrapper types that hold
//! references and format on demand. Everything is markdown, so the same
//! string can be rendered in the terminal or returned over MCP.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │  (Plan, Node)   │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use atp_core::{display::FailureReport, schema::validate};
//!
//! let failure = validate("[]").unwrap_err();
//! let output = FailureReport(&failure).to_string();
//! assert!(output.contains("# Invalid ATP plan"));
//! assert!(output.contains("- Root JSON value must be an object"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Edges, FailureReport, StatusSummary};
pub use datetime::LocalDateTime;
pub use models::NodeView;
pub use results::CheckResult;
