mod common;

use std::path::PathBuf;

use atp_core::{
    load_plan, validate, FailureKind, NodeStatus, ParseReport, PlanGraph, ProjectStatus,
};
use common::{meta, node, plan_doc};
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_scenario_invalid_json() {
    let failure = validate("{not json").unwrap_err();
    assert_eq!(failure.category(), "Invalid JSON");
    assert_eq!(failure.issues.len(), 1);
}

#[test]
fn test_scenario_array_root() {
    let failure = validate("[]").unwrap_err();
    assert_eq!(failure.category(), "Invalid ATP plan");
    assert_eq!(failure.issues, vec!["Root JSON value must be an object"]);
}

#[test]
fn test_scenario_empty_nodes() {
    let raw = r#"{"meta":{"project_name":"X","version":"1.3","project_status":"ACTIVE"},"nodes":{}}"#;
    let plan = validate(raw).unwrap();
    assert!(plan.nodes.is_empty());
}

#[test]
fn test_scenario_unknown_dependency() {
    let failure = validate(&plan_doc(json!({ "a": node("READY", &["b"]) }))).unwrap_err();
    assert_eq!(failure.category(), "ATP plan validation failed");
    assert_eq!(
        failure.issues,
        vec!["nodes.a.dependencies references unknown node 'b' in plan"]
    );
}

#[test]
fn test_scenario_bad_version_and_project_status() {
    let raw = json!({
        "meta": { "project_name": "X", "version": "1.2", "project_status": "done" },
        "nodes": {}
    })
    .to_string();
    let failure = validate(&raw).unwrap_err();
    assert_eq!(
        failure.issues,
        vec![
            "meta.version must equal \"1.3\"",
            "meta.project_status must be one of: DRAFT, ACTIVE, PAUSED, ARCHIVED",
        ]
    );
}

#[test]
fn test_scenario_self_dependency_is_accepted() {
    let plan = validate(&plan_doc(json!({ "x": node("READY", &["x"]) }))).unwrap();
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_repeated_validation_is_identical() {
    let raw = json!({
        "meta": { "project_name": "", "version": "2", "project_status": 7 },
        "nodes": {
            "q": { "title": "", "dependencies": "nope", "status": "DONE" },
            "p": node("READY", &["q", "missing", "also-missing"]),
            "r": 12
        }
    })
    .to_string();

    let first = ParseReport::from(validate(&raw)).to_json().unwrap();
    for _ in 0..5 {
        assert_eq!(ParseReport::from(validate(&raw)).to_json().unwrap(), first);
    }
}

#[test]
fn test_independent_defects_are_all_reported() {
    let mut bad_title = node("READY", &[]);
    bad_title["title"] = json!(" ");
    let mut bad_status = node("READY", &[]);
    bad_status["status"] = json!("ready");
    let mut bad_report = node("READY", &[]);
    bad_report["report"] = json!(["not", "text"]);

    let raw = plan_doc(json!({
        "a": bad_title,
        "b": bad_status,
        "c": bad_report,
        "d": node("LOCKED", &["nowhere"]),
        "e": node("READY", &["a"]),
    }));
    let failure = validate(&raw).unwrap_err();
    assert_eq!(failure.issues.len(), 4);
    assert_eq!(
        failure.issues,
        vec![
            "nodes.a.title must be a non-empty string",
            "nodes.b.status must be one of: LOCKED, READY, CLAIMED, COMPLETED, FAILED",
            "nodes.c.report must be a string when provided",
            "nodes.d.dependencies references unknown node 'nowhere' in plan",
        ]
    );
}

#[test]
fn test_invalid_json_never_reports_structure() {
    for raw in ["{", "{\"meta\": }", "nodes", "{\"a\":1,}", "[1, 2"] {
        let failure = validate(raw).unwrap_err();
        assert_eq!(failure.kind, FailureKind::InvalidJson, "input {raw:?}");
        assert_eq!(failure.issues.len(), 1);
    }
}

#[test]
fn test_enum_issues_list_every_legal_value() {
    let mut bad = node("READY", &[]);
    bad["status"] = json!("RUNNING");
    let raw = json!({
        "meta": { "project_name": "X", "version": "1.3", "project_status": "active" },
        "nodes": { "n": bad }
    })
    .to_string();
    let issues = validate(&raw).unwrap_err().issues;

    assert!(issues[0].starts_with("meta.project_status"));
    for status in ProjectStatus::ALL {
        assert!(issues[0].contains(status.as_str()));
    }
    assert!(issues[1].starts_with("nodes.n.status"));
    for status in NodeStatus::ALL {
        assert!(issues[1].contains(status.as_str()));
    }
}

#[test]
fn test_meta_issues_precede_node_issues() {
    // "b" is not an object but is still a key, so "a"'s reference resolves.
    let raw = json!({
        "meta": { "version": "1.3", "project_status": "ACTIVE" },
        "nodes": { "a": node("READY", &["b", "c"]), "b": [] }
    })
    .to_string();
    assert_eq!(
        validate(&raw).unwrap_err().issues,
        vec![
            "meta.project_name must be a non-empty string",
            "nodes.b must be an object",
            "nodes.a.dependencies references unknown node 'c' in plan",
        ]
    );
}

#[test]
fn test_success_implies_every_reference_resolves() {
    let plan = load_plan(Some(&fixture("release.atp.json"))).unwrap();
    let graph = PlanGraph::new(&plan);

    for (id, node) in &plan.nodes {
        for dep in &node.dependencies {
            assert!(plan.nodes.contains_key(dep));
            assert!(graph.dependents_of(dep).contains(&id.as_str()));
        }
    }
}

#[test]
fn test_fixture_round_trip_through_report() {
    let plan = load_plan(Some(&fixture("release.atp.json"))).unwrap();
    assert_eq!(plan.meta.project_name, "Release 2.0");
    assert_eq!(plan.node("implement").unwrap().status, NodeStatus::Claimed);

    let graph = PlanGraph::new(&plan);
    assert_eq!(
        graph.topological_order().unwrap(),
        ["design", "implement", "docs", "release"]
    );

    let report = ParseReport::Success { graph: plan.clone() };
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let reparsed = validate(&value["graph"].to_string()).unwrap();
    assert_eq!(reparsed, plan);
}

#[test]
fn test_meta_must_be_an_object_with_valid_nodes() {
    let raw = json!({ "meta": "X", "nodes": { "a": node("READY", &[]) } }).to_string();
    assert_eq!(validate(&raw).unwrap_err().issues, vec!["meta must be an object"]);

    let raw = json!({ "meta": meta(), "nodes": null }).to_string();
    assert_eq!(
        validate(&raw).unwrap_err().issues,
        vec!["nodes must be an object map of node IDs to node definitions"]
    );
}

#[test]
fn test_parser_limits_are_invalid_json() {
    let nested = format!("{}\"deep\"{}", "[".repeat(200), "]".repeat(200));
    let raw = format!(
        r#"{{"meta":{},"nodes":{{"a":{{"title":"T","instruction":"I","dependencies":[],"status":"READY","context":{nested}}}}}}}"#,
        meta()
    );
    let failure = validate(&raw).unwrap_err();
    assert_eq!(failure.kind, FailureKind::InvalidJson);
    assert!(failure.issues[0].contains("recursion limit exceeded"));

    let raw = r#"{"meta":{"project_name":"X","version":1e400,"project_status":"ACTIVE"},"nodes":{}}"#;
    let failure = validate(raw).unwrap_err();
    assert_eq!(failure.kind, FailureKind::InvalidJson);
    assert!(failure.issues[0].contains("number out of range"));
}
