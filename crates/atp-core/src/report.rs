//! Wire shapes handed to the presentation layer.
//!
//! A validation outcome is serialized as one of
//!
//! ```text
//! { "success": true,  "graph": <plan> }
//! { "success": false, "error": "<category>", "issues": ["...", ...] }
//! ```
//!
//! and wrapped in a [`GraphMessage`] together with the path it was loaded
//! from.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{
    error::{Result, ValidationFailure},
    models::Plan,
};

/// Discriminated validation outcome in its wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseReport {
    Success { graph: Plan },
    Failure { error: String, issues: Vec<String> },
}

impl ParseReport {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseReport::Success { .. })
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<std::result::Result<Plan, ValidationFailure>> for ParseReport {
    fn from(result: std::result::Result<Plan, ValidationFailure>) -> Self {
        match result {
            Ok(graph) => ParseReport::Success { graph },
            Err(failure) => ParseReport::Failure {
                error: failure.category().to_string(),
                issues: failure.issues,
            },
        }
    }
}

impl Serialize for ParseReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParseReport::Success { graph } => {
                let mut state = serializer.serialize_struct("ParseReport", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("graph", graph)?;
                state.end()
            }
            ParseReport::Failure { error, issues } => {
                let mut state = serializer.serialize_struct("ParseReport", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("issues", issues)?;
                state.end()
            }
        }
    }
}

/// Message pushed to a presentation layer after a plan is (re)loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "graphData")]
pub struct GraphMessage {
    #[serde(rename = "planUri")]
    pub plan_path: Option<String>,
    pub result: ParseReport,
}

impl GraphMessage {
    pub fn new(plan_path: Option<String>, result: ParseReport) -> Self {
        Self { plan_path, result }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{error::FailureKind, schema::validate};

    #[test]
    fn test_failure_wire_shape() {
        let report = ParseReport::from(validate("[]"));
        assert!(!report.is_success());

        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Invalid ATP plan",
                "issues": ["Root JSON value must be an object"]
            })
        );
    }

    #[test]
    fn test_success_wire_shape() {
        let raw = r#"{"meta":{"project_name":"X","version":"1.3","project_status":"ACTIVE"},"nodes":{}}"#;
        let report = ParseReport::from(validate(raw));
        assert!(report.is_success());

        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["graph"]["meta"]["project_name"], json!("X"));
        assert_eq!(value["graph"]["nodes"], json!({}));
    }

    #[test]
    fn test_no_plan_selected_has_empty_issues() {
        let report = ParseReport::from(Err::<Plan, _>(ValidationFailure::new(
            FailureKind::NoPlanSelected,
            Vec::new(),
        )));
        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["error"], json!("No ATP plan selected"));
        assert_eq!(value["issues"], json!([]));
    }

    #[test]
    fn test_graph_message_envelope() {
        let message = GraphMessage::new(
            Some("/work/plan.atp.json".to_string()),
            ParseReport::from(validate("{not json")),
        );
        let value: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], json!("graphData"));
        assert_eq!(value["planUri"], json!("/work/plan.atp.json"));
        assert_eq!(value["result"]["error"], json!("Invalid JSON"));
    }

    #[test]
    fn test_graph_message_without_path() {
        let message = GraphMessage::new(
            None,
            ParseReport::Failure {
                error: "No ATP plan selected".to_string(),
                issues: vec![],
            },
        );
        let value: Value = serde_json::from_str(&message.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["planUri"], Value::Null);
    }
}
