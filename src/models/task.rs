//! Task record.
//!
//! A task names the skills it requires, the phases it prefers, and how many
//! phases it occupies.

use serde::{Deserialize, Serialize};

use super::{Parsed, PhaseSpec};

/// A normalized task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 0-based position of the source row, for error attribution.
    pub row_index: usize,
    /// Unique task identifier (empty when the cell was missing).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Skill tags the task requires from the worker pool.
    pub required_skills: Vec<String>,
    /// Preferred execution phases (explicit list or inclusive range).
    pub preferred_phases: Parsed<PhaseSpec>,
    /// Number of phases the task occupies, expected >= 1.
    pub duration_phases: Parsed<f64>,
    /// Concurrency ceiling. Checked for numeric parseability only.
    pub max_concurrent: Parsed<f64>,
}

impl Task {
    /// Creates a new task record.
    pub fn new(row_index: usize, id: impl Into<String>) -> Self {
        Self {
            row_index,
            id: id.into(),
            name: String::new(),
            required_skills: Vec::new(),
            preferred_phases: Parsed::Absent,
            duration_phases: Parsed::Absent,
            max_concurrent: Parsed::Absent,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a required skill tag.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Sets the preferred phases.
    pub fn with_phases(mut self, phases: PhaseSpec) -> Self {
        self.preferred_phases = Parsed::Value(phases);
        self
    }

    /// Sets the duration in phases.
    pub fn with_duration(mut self, phases: f64) -> Self {
        self.duration_phases = Parsed::Value(phases);
        self
    }

    /// Sets the concurrency ceiling.
    pub fn with_max_concurrent(mut self, max_concurrent: f64) -> Self {
        self.max_concurrent = Parsed::Value(max_concurrent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(2, "T1")
            .with_name("Install pipes")
            .with_required_skill("plumbing")
            .with_phases(PhaseSpec::Range { start: 2, end: 4 })
            .with_duration(2.0)
            .with_max_concurrent(3.0);

        assert_eq!(task.row_index, 2);
        assert_eq!(task.id, "T1");
        assert_eq!(task.required_skills, vec!["plumbing"]);
        assert_eq!(
            task.preferred_phases.value(),
            Some(&PhaseSpec::Range { start: 2, end: 4 })
        );
        assert_eq!(task.duration_phases, Parsed::Value(2.0));
        assert_eq!(task.max_concurrent, Parsed::Value(3.0));
    }

    #[test]
    fn test_task_defaults() {
        let task = Task::new(0, "T9");
        assert!(task.required_skills.is_empty());
        assert!(task.preferred_phases.is_absent());
        assert!(task.duration_phases.is_absent());
        assert!(task.max_concurrent.is_absent());
    }
}
