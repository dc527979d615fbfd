//! Data models for ATP plans.
//!
//! These types are the typed form of an Agent Task Protocol v1.3 document.
//! They are only ever constructed from a document that passed
//! [`crate::schema::validate`]; there is no partially valid plan. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use atp_core::models::{NodeStatus, ProjectStatus};
//!
//! assert_eq!("READY".parse::<NodeStatus>(), Ok(NodeStatus::Ready));
//! assert!("ready".parse::<NodeStatus>().is_err());
//! assert_eq!(ProjectStatus::ALL.len(), 4);
//! ```

pub mod meta;
pub mod node;
pub mod plan;
pub mod status;

#[cfg(test)]
mod tests;

pub use meta::Meta;
pub use node::Node;
pub use plan::Plan;
pub use status::{NodeStatus, ProjectStatus};

/// The only schema version accepted by the validator.
pub const SCHEMA_VERSION: &str = "1.3";
