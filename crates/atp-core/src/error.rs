//! Error types for the ATP core library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Category of a failed attempt to obtain a plan.
///
/// The first three are produced by the schema validator; the last two by the
/// plan-file loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Input text is not syntactically valid JSON
    InvalidJson,
    /// Root value is not a JSON object
    InvalidPlan,
    /// One or more field-level or referential violations
    ValidationFailed,
    /// No plan file was given or discovered
    NoPlanSelected,
    /// The plan file could not be read
    ReadFailed,
}

impl FailureKind {
    /// Category string shown to users and sent to the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidJson => "Invalid JSON",
            FailureKind::InvalidPlan => "Invalid ATP plan",
            FailureKind::ValidationFailed => "ATP plan validation failed",
            FailureKind::NoPlanSelected => "No ATP plan selected",
            FailureKind::ReadFailed => "Failed to read ATP plan",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plan could not be produced; carries every issue found.
///
/// No partial plan ever accompanies a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub issues: Vec<String>,
}

impl ValidationFailure {
    pub fn new(kind: FailureKind, issues: Vec<String>) -> Self {
        Self { kind, issues }
    }

    /// Failure with exactly one issue.
    pub fn single(kind: FailureKind, issue: impl Into<String>) -> Self {
        Self::new(kind, vec![issue.into()])
    }

    /// Category string, e.g. `"Invalid JSON"`.
    pub fn category(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Errors raised by the collaborator layer around the validator (plan
/// discovery, output encoding).
#[derive(Error, Debug)]
pub enum AtpError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Plan discovery errors
    #[error("Failed to search for plans matching '{pattern}': {message}")]
    Discovery { pattern: String, message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl AtpError {
    /// Creates a discovery error for a glob pattern.
    pub fn discovery(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        AtpError::Discovery {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for collaborator operations
pub type Result<T> = std::result::Result<T, AtpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_is_category() {
        let failure = ValidationFailure::single(FailureKind::InvalidPlan, "Root JSON value must be an object");
        assert_eq!(failure.to_string(), "Invalid ATP plan");
        assert_eq!(failure.category(), "Invalid ATP plan");
        assert_eq!(failure.issues.len(), 1);
    }

    #[test]
    fn test_category_strings() {
        assert_eq!(FailureKind::InvalidJson.as_str(), "Invalid JSON");
        assert_eq!(FailureKind::ValidationFailed.as_str(), "ATP plan validation failed");
        assert_eq!(FailureKind::NoPlanSelected.as_str(), "No ATP plan selected");
        assert_eq!(FailureKind::ReadFailed.as_str(), "Failed to read ATP plan");
    }

    #[test]
    fn test_discovery_error_message() {
        let err = AtpError::discovery("**/*.atp.json", "bad pattern");
        assert_eq!(
            err.to_string(),
            "Failed to search for plans matching '**/*.atp.json': bad pattern"
        );
    }
}
