//! Client record.
//!
//! A client requests tasks from the scheduler with a priority weight and
//! optional free-form attributes.

use serde::{Deserialize, Serialize};

use super::Parsed;

/// A normalized client record.
///
/// Produced once per pipeline run by the normalizer and never mutated
/// afterwards; validators only read it and emit separate findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// 0-based position of the source row, for error attribution.
    pub row_index: usize,
    /// Unique client identifier (empty when the cell was missing).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Scheduling priority, expected in 1..=5.
    pub priority_level: Parsed<f64>,
    /// Identifiers of the tasks this client requests.
    pub requested_task_ids: Vec<String>,
    /// Free-form JSON attributes. Content is untyped and unchecked beyond
    /// syntactic validity.
    pub attributes_json: Parsed<serde_json::Value>,
}

impl Client {
    /// Creates a new client record.
    pub fn new(row_index: usize, id: impl Into<String>) -> Self {
        Self {
            row_index,
            id: id.into(),
            name: String::new(),
            priority_level: Parsed::Absent,
            requested_task_ids: Vec::new(),
            attributes_json: Parsed::Absent,
        }
    }

    /// Sets the client name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority level.
    pub fn with_priority_level(mut self, level: f64) -> Self {
        self.priority_level = Parsed::Value(level);
        self
    }

    /// Adds a requested task ID.
    pub fn with_requested_task(mut self, task_id: impl Into<String>) -> Self {
        self.requested_task_ids.push(task_id.into());
        self
    }

    /// Sets the attributes blob.
    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes_json = Parsed::Value(attributes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_builder() {
        let client = Client::new(0, "C1")
            .with_name("Acme")
            .with_priority_level(3.0)
            .with_requested_task("T1")
            .with_requested_task("T2")
            .with_attributes(json!({"region": "EU"}));

        assert_eq!(client.row_index, 0);
        assert_eq!(client.id, "C1");
        assert_eq!(client.name, "Acme");
        assert_eq!(client.priority_level, Parsed::Value(3.0));
        assert_eq!(client.requested_task_ids, vec!["T1", "T2"]);
        assert_eq!(
            client.attributes_json.value(),
            Some(&json!({"region": "EU"}))
        );
    }

    #[test]
    fn test_client_defaults() {
        let client = Client::new(4, "C9");
        assert!(client.name.is_empty());
        assert!(client.priority_level.is_absent());
        assert!(client.requested_task_ids.is_empty());
        assert!(client.attributes_json.is_absent());
    }
}
