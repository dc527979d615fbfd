#[cfg(test)]
mod model_tests {
    use indexmap::IndexMap;
    use serde_json::json;

    use crate::models::{Meta, Node, NodeStatus, Plan, ProjectStatus, SCHEMA_VERSION};

    fn create_test_node(status: NodeStatus, dependencies: &[&str]) -> Node {
        Node {
            title: "Write parser".to_string(),
            instruction: "Implement the tokenizer".to_string(),
            context: None,
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            status,
            worker_id: None,
            started_at: None,
            completed_at: None,
            artifacts: None,
            report: None,
        }
    }

    fn create_test_plan() -> Plan {
        let mut nodes = IndexMap::new();
        nodes.insert("a".to_string(), create_test_node(NodeStatus::Completed, &[]));
        nodes.insert("b".to_string(), create_test_node(NodeStatus::Ready, &["a"]));
        Plan {
            meta: Meta {
                project_name: "Compiler".to_string(),
                version: SCHEMA_VERSION.to_string(),
                created_at: None,
                project_status: ProjectStatus::Active,
            },
            nodes,
        }
    }

    #[test]
    fn test_node_status_wire_names() {
        let names: Vec<&str> = NodeStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["LOCKED", "READY", "CLAIMED", "COMPLETED", "FAILED"]);
    }

    #[test]
    fn test_project_status_wire_names() {
        let names: Vec<&str> = ProjectStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["DRAFT", "ACTIVE", "PAUSED", "ARCHIVED"]);
    }

    #[test]
    fn test_status_parsing_is_case_sensitive() {
        assert_eq!("CLAIMED".parse::<NodeStatus>(), Ok(NodeStatus::Claimed));
        assert!("claimed".parse::<NodeStatus>().is_err());
        assert_eq!("PAUSED".parse::<ProjectStatus>(), Ok(ProjectStatus::Paused));
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in NodeStatus::ALL {
            assert_eq!(json!(status), json!(status.as_str()));
        }
        for status in ProjectStatus::ALL {
            assert_eq!(json!(status), json!(status.as_str()));
        }
    }

    #[test]
    fn test_node_serialization_skips_absent_optionals() {
        let node = create_test_node(NodeStatus::Locked, &["x"]);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Write parser",
                "instruction": "Implement the tokenizer",
                "dependencies": ["x"],
                "status": "LOCKED"
            })
        );
    }

    #[test]
    fn test_plan_preserves_node_order() {
        let plan = create_test_plan();
        let ids: Vec<&str> = plan.nodes.keys().map(String::as_str).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(plan.node("b").unwrap().dependencies, vec!["a".to_string()]);
        assert!(plan.node("missing").is_none());
    }
}
