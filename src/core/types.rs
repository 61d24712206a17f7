use serde::{Deserialize, Serialize};

/// Stable identifier for a workflow in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(pub String);

impl WorkflowId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkflowId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_id_serializes_as_bare_string() {
        let id = WorkflowId::new("content-powerhouse");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"content-powerhouse\"");

        let back: WorkflowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_workflow_id_display() {
        assert_eq!(WorkflowId::from("dev-dream-team").to_string(), "dev-dream-team");
    }
}
