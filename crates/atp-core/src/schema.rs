//! Schema validation for ATP v1.3 plan documents.
//!
//! [`validate`] turns untrusted text into a typed [`Plan`] or a
//! [`ValidationFailure`] listing every defect found. Parsing and the root
//! shape check are fatal and short-circuit with a single issue; past that
//! point every check runs and all issues are reported together.
//!
//! Issue order is fixed: `meta` issues, then per-node field issues in the
//! document's key order, then unresolved dependency references.
//!
//! Cycles in the dependency relation (including a node listing itself) are
//! not rejected.
//!
//! # Examples
//!
//! ```rust
//! use atp_core::schema::validate;
//!
//! let raw = r#"{
//!     "meta": { "project_name": "X", "version": "1.3", "project_status": "ACTIVE" },
//!     "nodes": {
//!         "a": { "title": "T", "instruction": "I", "dependencies": ["b"], "status": "READY" }
//!     }
//! }"#;
//!
//! let failure = validate(raw).unwrap_err();
//! assert_eq!(failure.category(), "ATP plan validation failed");
//! assert_eq!(
//!     failure.issues,
//!     vec!["nodes.a.dependencies references unknown node 'b' in plan".to_string()]
//! );
//! ```

use std::collections::HashSet;

use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{FailureKind, ValidationFailure},
    models::{NodeStatus, Plan, ProjectStatus, SCHEMA_VERSION},
};

/// Issue reported when the document root is not a JSON object.
pub const ROOT_NOT_OBJECT: &str = "Root JSON value must be an object";

/// Optional node fields that must be strings when present, in check order.
/// `artifacts` is checked between `completed_at` and `report`.
const OPTIONAL_TEXT_FIELDS: [&str; 4] = ["context", "worker_id", "started_at", "completed_at"];

/// Validate raw text as an ATP v1.3 plan.
pub fn validate(raw: &str) -> Result<Plan, ValidationFailure> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ValidationFailure::single(FailureKind::InvalidJson, e.to_string()))?;
    validate_value(value)
}

/// Validate an already-parsed JSON value as an ATP v1.3 plan.
pub fn validate_value(value: Value) -> Result<Plan, ValidationFailure> {
    let issues = {
        let Some(root) = value.as_object() else {
            return Err(ValidationFailure::single(
                FailureKind::InvalidPlan,
                ROOT_NOT_OBJECT,
            ));
        };

        let mut issues = Vec::new();
        check_meta(root.get("meta"), &mut issues);
        check_nodes(root.get("nodes"), &mut issues);
        issues
    };

    if !issues.is_empty() {
        debug!("plan rejected with {} issue(s)", issues.len());
        return Err(ValidationFailure::new(FailureKind::ValidationFailed, issues));
    }

    serde_json::from_value(value)
        .map_err(|e| ValidationFailure::single(FailureKind::ValidationFailed, e.to_string()))
}

fn check_meta(meta: Option<&Value>, issues: &mut Vec<String>) {
    let Some(meta) = meta.and_then(Value::as_object) else {
        issues.push("meta must be an object".to_string());
        return;
    };

    if !is_non_empty_string(meta.get("project_name")) {
        issues.push("meta.project_name must be a non-empty string".to_string());
    }

    if meta.get("version").and_then(Value::as_str) != Some(SCHEMA_VERSION) {
        issues.push(format!("meta.version must equal \"{SCHEMA_VERSION}\""));
    }

    let status = meta.get("project_status").and_then(Value::as_str);
    if status.and_then(|s| s.parse::<ProjectStatus>().ok()).is_none() {
        issues.push(format!(
            "meta.project_status must be one of: {}",
            legal_values(ProjectStatus::ALL.iter().map(ProjectStatus::as_str))
        ));
    }

    if !is_absent_or_string(meta.get("created_at")) {
        issues.push("meta.created_at must be a string when provided".to_string());
    }
}

fn check_nodes(nodes: Option<&Value>, issues: &mut Vec<String>) {
    let Some(nodes) = nodes.and_then(Value::as_object) else {
        issues.push("nodes must be an object map of node IDs to node definitions".to_string());
        return;
    };

    for (id, value) in nodes {
        match value.as_object() {
            Some(node) => check_node_fields(id, node, issues),
            None => issues.push(format!("nodes.{id} must be an object")),
        }
    }

    check_dependency_references(nodes, issues);
}

fn check_node_fields(id: &str, node: &Map<String, Value>, issues: &mut Vec<String>) {
    if !is_non_empty_string(node.get("title")) {
        issues.push(format!("nodes.{id}.title must be a non-empty string"));
    }

    if !is_non_empty_string(node.get("instruction")) {
        issues.push(format!("nodes.{id}.instruction must be a non-empty string"));
    }

    match node.get("dependencies").and_then(Value::as_array) {
        None => issues.push(format!("nodes.{id}.dependencies must be an array of node IDs")),
        Some(deps) if !deps.iter().all(Value::is_string) => {
            issues.push(format!("nodes.{id}.dependencies may only contain strings"));
        }
        Some(_) => {}
    }

    let status = node.get("status").and_then(Value::as_str);
    if status.and_then(|s| s.parse::<NodeStatus>().ok()).is_none() {
        issues.push(format!(
            "nodes.{id}.status must be one of: {}",
            legal_values(NodeStatus::ALL.iter().map(NodeStatus::as_str))
        ));
    }

    for field in OPTIONAL_TEXT_FIELDS {
        if !is_absent_or_string(node.get(field)) {
            issues.push(format!("nodes.{id}.{field} must be a string when provided"));
        }
    }

    if node.get("artifacts").is_some_and(|a| !is_string_array(a)) {
        issues.push(format!(
            "nodes.{id}.artifacts must be an array of strings when provided"
        ));
    }

    if !is_absent_or_string(node.get("report")) {
        issues.push(format!("nodes.{id}.report must be a string when provided"));
    }
}

/// Every string entry of every well-formed `dependencies` array must name a
/// node. Runs over nodes that failed field checks too.
fn check_dependency_references(nodes: &Map<String, Value>, issues: &mut Vec<String>) {
    let known: HashSet<&str> = nodes.keys().map(String::as_str).collect();

    for (id, value) in nodes {
        let Some(deps) = value.get("dependencies").and_then(Value::as_array) else {
            continue;
        };

        for dep in deps.iter().filter_map(Value::as_str) {
            if !known.contains(dep) {
                issues.push(format!(
                    "nodes.{id}.dependencies references unknown node '{dep}' in plan"
                ));
            }
        }
    }
}

fn legal_values<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

/// A present key holding `null` counts as present.
fn is_absent_or_string(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_string)
}

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}
