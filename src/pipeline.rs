//! Full validation pass.
//!
//! Wires the stages together: raw rows → normalization → field validation
//! (per dataset, fixed order: clients, workers, tasks) → referential
//! validation → [`ValidationReport`].
//!
//! The pass is synchronous, stateless, and cheap enough to re-run wholesale
//! whenever any dataset changes; datasets are bounded to a few thousand
//! rows. Running it twice over unchanged input yields an identical report.

use tracing::debug;

use crate::models::{Client, RawRow, Task, Worker};
use crate::normalize::{normalize_clients, normalize_tasks, normalize_workers};
use crate::validation::{field, referential, ValidationReport};

/// The raw datasets for one validation pass. Each dataset is optional;
/// cross-checks against an absent dataset are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetInput {
    /// Raw client rows, if the caller has loaded them.
    pub clients: Option<Vec<RawRow>>,
    /// Raw worker rows, if the caller has loaded them.
    pub workers: Option<Vec<RawRow>>,
    /// Raw task rows, if the caller has loaded them.
    pub tasks: Option<Vec<RawRow>>,
}

impl DatasetInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the client dataset.
    pub fn with_clients(mut self, rows: Vec<RawRow>) -> Self {
        self.clients = Some(rows);
        self
    }

    /// Supplies the worker dataset.
    pub fn with_workers(mut self, rows: Vec<RawRow>) -> Self {
        self.workers = Some(rows);
        self
    }

    /// Supplies the task dataset.
    pub fn with_tasks(mut self, rows: Vec<RawRow>) -> Self {
        self.tasks = Some(rows);
        self
    }

    /// Supplies a dataset under its caller-facing name (`"clients"`,
    /// `"workers"` or `"tasks"`, matched exactly). Returns whether the name
    /// was recognized.
    pub fn insert(&mut self, name: &str, rows: Vec<RawRow>) -> bool {
        match name {
            "clients" => self.clients = Some(rows),
            "workers" => self.workers = Some(rows),
            "tasks" => self.tasks = Some(rows),
            _ => return false,
        }
        true
    }
}

/// Result of one validation pass: the canonical records plus the report.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    /// Normalized clients, one per input row.
    pub clients: Option<Vec<Client>>,
    /// Normalized workers, one per input row.
    pub workers: Option<Vec<Worker>>,
    /// Normalized tasks, one per input row.
    pub tasks: Option<Vec<Task>>,
    /// All findings, stably ordered.
    pub report: ValidationReport,
}

impl PipelineRun {
    /// Whether the downstream export gate may open (no findings).
    pub fn export_allowed(&self) -> bool {
        self.report.is_empty()
    }
}

/// Runs the full pipeline over whichever datasets are present.
pub fn run(input: &DatasetInput) -> PipelineRun {
    let clients = input.clients.as_deref().map(normalize_clients);
    let workers = input.workers.as_deref().map(normalize_workers);
    let tasks = input.tasks.as_deref().map(normalize_tasks);

    debug!(
        clients = clients.as_ref().map_or(0, Vec::len),
        workers = workers.as_ref().map_or(0, Vec::len),
        tasks = tasks.as_ref().map_or(0, Vec::len),
        "normalized datasets"
    );

    let mut report = ValidationReport::new();
    if let Some(clients) = &clients {
        report.append(field::validate_clients(clients));
    }
    if let Some(workers) = &workers {
        report.append(field::validate_workers(workers));
    }
    if let Some(tasks) = &tasks {
        report.append(field::validate_tasks(tasks));
    }
    report.append(referential::validate_references(
        clients.as_deref(),
        workers.as_deref(),
        tasks.as_deref(),
    ));

    debug!(findings = report.len(), "validation pass complete");

    PipelineRun {
        clients,
        workers,
        tasks,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EntityKind, ErrorKind};

    fn sample_input() -> DatasetInput {
        DatasetInput::new()
            .with_clients(vec![
                RawRow::new()
                    .with("ClientID", "C1")
                    .with("ClientName", "Acme")
                    .with("PriorityLevel", 3.0)
                    .with("RequestedTaskIDs", "T1"),
                RawRow::new()
                    .with("ClientID", "C1")
                    .with("ClientName", "Dup")
                    .with("PriorityLevel", 6.0)
                    .with("RequestedTaskIDs", "T9"),
            ])
            .with_workers(vec![RawRow::new()
                .with("WorkerID", "W1")
                .with("WorkerName", "Mira")
                .with("Skills", "plumbing")
                .with("AvailableSlots", "[1,2]")
                .with("MaxLoadPerPhase", 2.0)])
            .with_tasks(vec![RawRow::new()
                .with("TaskID", "T1")
                .with("TaskName", "Install")
                .with("RequiredSkills", "plumbing,electrical")
                .with("PreferredPhases", "2-4")
                .with("DurationPhases", 2.0)
                .with("MaxConcurrent", 1.0)])
    }

    #[test]
    fn test_full_pass_ordering() {
        let run = run(&sample_input());
        let report = &run.report;

        // Client field errors first (duplicate ID then range), then the
        // referential errors (unknown reference before skill coverage).
        let kinds: Vec<ErrorKind> = report.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::DuplicateId,
                ErrorKind::OutOfRange,
                ErrorKind::UnknownReference,
                ErrorKind::SkillCoverage,
            ]
        );
        assert!(!run.export_allowed());
    }

    #[test]
    fn test_idempotence() {
        let input = sample_input();
        let first = run(&input);
        let second = run(&input);
        assert_eq!(first.report, second.report);
        assert_eq!(first.clients, second.clients);
        assert_eq!(first.workers, second.workers);
        assert_eq!(first.tasks, second.tasks);
    }

    #[test]
    fn test_clean_input_opens_export_gate() {
        let input = DatasetInput::new()
            .with_clients(vec![RawRow::new()
                .with("ClientID", "C1")
                .with("ClientName", "Acme")
                .with("PriorityLevel", 2.0)
                .with("RequestedTaskIDs", "T1")])
            .with_workers(vec![RawRow::new()
                .with("WorkerID", "W1")
                .with("WorkerName", "Mira")
                .with("Skills", "plumbing")])
            .with_tasks(vec![RawRow::new()
                .with("TaskID", "T1")
                .with("TaskName", "Install")
                .with("RequiredSkills", "plumbing")]);

        let run = run(&input);
        assert!(run.report.is_empty());
        assert!(run.export_allowed());
    }

    #[test]
    fn test_partial_datasets_suppress_cross_checks() {
        let input = DatasetInput::new().with_clients(vec![RawRow::new()
            .with("ClientID", "C1")
            .with("ClientName", "Acme")
            .with("RequestedTaskIDs", "T9")]);

        let run = run(&input);
        assert!(run.report.is_empty());
        assert!(run.workers.is_none());
        assert!(run.tasks.is_none());
    }

    #[test]
    fn test_insert_by_dataset_name() {
        let mut input = DatasetInput::new();
        assert!(input.insert("clients", vec![RawRow::new().with("ClientID", "C1")]));
        assert!(!input.insert("Clients", vec![]));
        assert!(!input.insert("invoices", vec![]));
        assert!(input.clients.is_some());
        assert!(input.workers.is_none());
    }

    #[test]
    fn test_report_attribution_by_entity() {
        let run = run(&sample_input());
        assert_eq!(run.report.count_for_entity(EntityKind::Clients), 3);
        assert_eq!(run.report.count_for_entity(EntityKind::Workers), 0);
        assert_eq!(run.report.count_for_entity(EntityKind::Tasks), 1);
    }
}
