//! Cross-entity validation.
//!
//! Resolves references between datasets: every requested task ID must name
//! an existing task, and every required skill must be offered by at least
//! one worker. A check is omitted entirely when the referenced dataset is
//! absent or empty — an unloaded dataset must not read as "every reference
//! is invalid".

use std::collections::HashSet;

use crate::models::{Client, Task, Worker};

use super::{EntityKind, ErrorKind, ValidationError};

/// Validates references across whichever datasets are present.
///
/// Output order: clients' unresolved task references (in row order), then
/// tasks' uncovered skills (in row order).
pub fn validate_references(
    clients: Option<&[Client]>,
    workers: Option<&[Worker]>,
    tasks: Option<&[Task]>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Client → Task
    if let (Some(clients), Some(tasks)) = (clients, tasks) {
        if !tasks.is_empty() {
            let task_ids: HashSet<&str> = tasks
                .iter()
                .map(|t| t.id.as_str())
                .filter(|id| !id.is_empty())
                .collect();

            for client in clients {
                for requested in &client.requested_task_ids {
                    if !task_ids.contains(requested.as_str()) {
                        errors.push(ValidationError::new(
                            ErrorKind::UnknownReference,
                            EntityKind::Clients,
                            client.row_index,
                            "RequestedTaskIDs",
                            format!("requested task '{requested}' does not exist"),
                        ));
                    }
                }
            }
        }
    }

    // Task → Worker skill coverage
    if let (Some(tasks), Some(workers)) = (tasks, workers) {
        if !workers.is_empty() {
            let skill_pool: HashSet<&str> = workers
                .iter()
                .flat_map(|w| w.skills.iter().map(String::as_str))
                .collect();

            for task in tasks {
                for skill in &task.required_skills {
                    if !skill_pool.contains(skill.as_str()) {
                        errors.push(ValidationError::new(
                            ErrorKind::SkillCoverage,
                            EntityKind::Tasks,
                            task.row_index,
                            "RequiredSkills",
                            format!("no worker provides required skill '{skill}'"),
                        ));
                    }
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_reference_suppressed_without_tasks() {
        let clients = vec![Client::new(0, "C1").with_name("A").with_requested_task("T9")];
        let errors = validate_references(Some(&clients), None, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_reference_suppressed_with_empty_tasks() {
        let clients = vec![Client::new(0, "C1").with_name("A").with_requested_task("T9")];
        let errors = validate_references(Some(&clients), None, Some(&[]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_reference_detected() {
        let clients = vec![Client::new(0, "C1").with_name("A").with_requested_task("T9")];
        let tasks = vec![Task::new(0, "T1").with_name("Other")];
        let errors = validate_references(Some(&clients), None, Some(&tasks));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::UnknownReference);
        assert_eq!(errors[0].entity, EntityKind::Clients);
        assert_eq!(errors[0].row_index, 0);
        assert_eq!(errors[0].field, "RequestedTaskIDs");
    }

    #[test]
    fn test_resolved_reference_passes() {
        let clients = vec![Client::new(0, "C1").with_name("A").with_requested_task("T1")];
        let tasks = vec![Task::new(0, "T1").with_name("Fix sink")];
        assert!(validate_references(Some(&clients), None, Some(&tasks)).is_empty());
    }

    #[test]
    fn test_skill_coverage_end_to_end() {
        let workers = vec![Worker::new(0, "W1").with_name("Mira").with_skill("plumbing")];
        let tasks = vec![Task::new(0, "T1")
            .with_name("Install")
            .with_required_skill("plumbing")
            .with_required_skill("electrical")];
        let errors = validate_references(None, Some(&workers), Some(&tasks));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::SkillCoverage);
        assert_eq!(errors[0].entity, EntityKind::Tasks);
        assert_eq!(errors[0].row_index, 0);
        assert!(errors[0].message.contains("electrical"));
    }

    #[test]
    fn test_skill_coverage_suppressed_without_workers() {
        let tasks = vec![Task::new(0, "T1")
            .with_name("Install")
            .with_required_skill("electrical")];
        assert!(validate_references(None, None, Some(&tasks)).is_empty());
        assert!(validate_references(None, Some(&[]), Some(&tasks)).is_empty());
    }

    #[test]
    fn test_reference_errors_precede_coverage_errors() {
        let clients = vec![Client::new(0, "C1").with_name("A").with_requested_task("T9")];
        let workers = vec![Worker::new(0, "W1").with_name("Mira").with_skill("plumbing")];
        let tasks = vec![Task::new(0, "T1")
            .with_name("Install")
            .with_required_skill("electrical")];
        let errors = validate_references(Some(&clients), Some(&workers), Some(&tasks));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ErrorKind::UnknownReference);
        assert_eq!(errors[1].kind, ErrorKind::SkillCoverage);
    }
}
