use serde_json::{json, Value};

/// A valid `meta` block.
pub fn meta() -> Value {
    json!({ "project_name": "X", "version": "1.3", "project_status": "ACTIVE" })
}

/// A valid node with the given status and dependencies.
pub fn node(status: &str, deps: &[&str]) -> Value {
    json!({ "title": "T", "instruction": "I", "dependencies": deps, "status": status })
}

/// A plan document with a valid `meta` block and the given nodes.
pub fn plan_doc(nodes: Value) -> String {
    json!({ "meta": meta(), "nodes": nodes }).to_string()
}
