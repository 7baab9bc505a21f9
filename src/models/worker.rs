//! Worker record.
//!
//! A worker offers skills, is available in specific phases, and carries a
//! per-phase load ceiling.

use serde::{Deserialize, Serialize};

use super::Parsed;

/// A normalized worker record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// 0-based position of the source row, for error attribution.
    pub row_index: usize,
    /// Unique worker identifier (empty when the cell was missing).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Skill tags this worker provides.
    pub skills: Vec<String>,
    /// Phases the worker is available in.
    pub available_slots: Parsed<Vec<i64>>,
    /// Maximum load per phase. Checked for numeric parseability only.
    pub max_load_per_phase: Parsed<f64>,
}

impl Worker {
    /// Creates a new worker record.
    pub fn new(row_index: usize, id: impl Into<String>) -> Self {
        Self {
            row_index,
            id: id.into(),
            name: String::new(),
            skills: Vec::new(),
            available_slots: Parsed::Absent,
            max_load_per_phase: Parsed::Absent,
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Sets the available slots.
    pub fn with_slots(mut self, slots: Vec<i64>) -> Self {
        self.available_slots = Parsed::Value(slots);
        self
    }

    /// Sets the per-phase load ceiling.
    pub fn with_max_load(mut self, max_load: f64) -> Self {
        self.max_load_per_phase = Parsed::Value(max_load);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let worker = Worker::new(1, "W1")
            .with_name("Mira")
            .with_skill("plumbing")
            .with_skill("welding")
            .with_slots(vec![1, 2, 3])
            .with_max_load(2.0);

        assert_eq!(worker.row_index, 1);
        assert_eq!(worker.id, "W1");
        assert_eq!(worker.skills, vec!["plumbing", "welding"]);
        assert_eq!(worker.available_slots, Parsed::Value(vec![1, 2, 3]));
        assert_eq!(worker.max_load_per_phase, Parsed::Value(2.0));
    }

    #[test]
    fn test_worker_defaults() {
        let worker = Worker::new(0, "W2");
        assert!(worker.skills.is_empty());
        assert!(worker.available_slots.is_absent());
        assert!(worker.max_load_per_phase.is_absent());
    }
}
