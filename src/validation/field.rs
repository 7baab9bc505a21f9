//! Per-entity field validation.
//!
//! Applies the rules that are local to a single dataset. Per-row evaluation
//! order is fixed: duplicate-ID check, required fields, then each structured
//! field in its declared order. That order, combined with input row order,
//! is what makes the final report stable.
//!
//! Absent optional fields are "rule not applicable", never an error. The
//! applicability test is explicit ([`Parsed::Absent`]) rather than a
//! truthiness test, so a literal `0` still gets checked.

use std::collections::HashSet;

use crate::models::{Client, Parsed, Task, Worker};

use super::{EntityKind, ErrorKind, ValidationError};

/// Validates client records against their local rules.
pub fn validate_clients(clients: &[Client]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for client in clients {
        check_duplicate(
            &mut seen,
            &client.id,
            EntityKind::Clients,
            client.row_index,
            "ClientID",
            &mut errors,
        );
        check_required(
            &client.id,
            EntityKind::Clients,
            client.row_index,
            "ClientID",
            &mut errors,
        );
        check_required(
            &client.name,
            EntityKind::Clients,
            client.row_index,
            "ClientName",
            &mut errors,
        );

        match &client.priority_level {
            Parsed::Absent => {}
            Parsed::Unparseable(raw) => errors.push(ValidationError::new(
                ErrorKind::MalformedValue,
                EntityKind::Clients,
                client.row_index,
                "PriorityLevel",
                format!("expected a number, got '{raw}'"),
            )),
            Parsed::Value(n) => {
                if n.fract() != 0.0 || !(1.0..=5.0).contains(n) {
                    errors.push(ValidationError::new(
                        ErrorKind::OutOfRange,
                        EntityKind::Clients,
                        client.row_index,
                        "PriorityLevel",
                        format!("PriorityLevel must be an integer between 1 and 5, got {n}"),
                    ));
                }
            }
        }

        // RequestedTaskIDs: comma splitting cannot fail; resolution is the
        // referential validator's job.

        if let Parsed::Unparseable(raw) = &client.attributes_json {
            errors.push(ValidationError::new(
                ErrorKind::BrokenJson,
                EntityKind::Clients,
                client.row_index,
                "AttributesJSON",
                format!("invalid JSON: '{raw}'"),
            ));
        }
    }

    errors
}

/// Validates worker records against their local rules.
pub fn validate_workers(workers: &[Worker]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for worker in workers {
        check_duplicate(
            &mut seen,
            &worker.id,
            EntityKind::Workers,
            worker.row_index,
            "WorkerID",
            &mut errors,
        );
        check_required(
            &worker.id,
            EntityKind::Workers,
            worker.row_index,
            "WorkerID",
            &mut errors,
        );
        check_required(
            &worker.name,
            EntityKind::Workers,
            worker.row_index,
            "WorkerName",
            &mut errors,
        );

        if let Parsed::Unparseable(raw) = &worker.available_slots {
            errors.push(ValidationError::new(
                ErrorKind::MalformedList,
                EntityKind::Workers,
                worker.row_index,
                "AvailableSlots",
                format!("AvailableSlots must be a bracketed list of integers, got '{raw}'"),
            ));
        }

        if let Parsed::Unparseable(raw) = &worker.max_load_per_phase {
            errors.push(ValidationError::new(
                ErrorKind::MalformedValue,
                EntityKind::Workers,
                worker.row_index,
                "MaxLoadPerPhase",
                format!("expected a number, got '{raw}'"),
            ));
        }
    }

    errors
}

/// Validates task records against their local rules.
pub fn validate_tasks(tasks: &[Task]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for task in tasks {
        check_duplicate(
            &mut seen,
            &task.id,
            EntityKind::Tasks,
            task.row_index,
            "TaskID",
            &mut errors,
        );
        check_required(
            &task.id,
            EntityKind::Tasks,
            task.row_index,
            "TaskID",
            &mut errors,
        );
        check_required(
            &task.name,
            EntityKind::Tasks,
            task.row_index,
            "TaskName",
            &mut errors,
        );

        // RequiredSkills: coverage is the referential validator's job.

        if let Parsed::Unparseable(raw) = &task.preferred_phases {
            errors.push(ValidationError::new(
                ErrorKind::MalformedList,
                EntityKind::Tasks,
                task.row_index,
                "PreferredPhases",
                format!("PreferredPhases must be a '[1,2,3]' list or an 'a-b' range, got '{raw}'"),
            ));
        }

        match &task.duration_phases {
            Parsed::Absent => {}
            Parsed::Unparseable(raw) => errors.push(ValidationError::new(
                ErrorKind::MalformedValue,
                EntityKind::Tasks,
                task.row_index,
                "DurationPhases",
                format!("expected a number, got '{raw}'"),
            )),
            Parsed::Value(n) => {
                if n.fract() != 0.0 || *n < 1.0 {
                    errors.push(ValidationError::new(
                        ErrorKind::OutOfRange,
                        EntityKind::Tasks,
                        task.row_index,
                        "DurationPhases",
                        format!("DurationPhases must be an integer >= 1, got {n}"),
                    ));
                }
            }
        }

        if let Parsed::Unparseable(raw) = &task.max_concurrent {
            errors.push(ValidationError::new(
                ErrorKind::MalformedValue,
                EntityKind::Tasks,
                task.row_index,
                "MaxConcurrent",
                format!("expected a number, got '{raw}'"),
            ));
        }
    }

    errors
}

/// Flags identifiers already seen in this dataset. The first occurrence is
/// canonical; every later one gets the finding. Empty identifiers are the
/// required-field check's concern and never count as duplicates.
fn check_duplicate<'a>(
    seen: &mut HashSet<&'a str>,
    id: &'a str,
    entity: EntityKind,
    row_index: usize,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if id.is_empty() {
        return;
    }
    if !seen.insert(id) {
        errors.push(ValidationError::new(
            ErrorKind::DuplicateId,
            entity,
            row_index,
            field,
            format!("duplicate {field} '{id}'"),
        ));
    }
}

fn check_required(
    value: &str,
    entity: EntityKind,
    row_index: usize,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if value.is_empty() {
        errors.push(ValidationError::new(
            ErrorKind::MissingRequired,
            entity,
            row_index,
            field,
            format!("missing required field {field}"),
        ));
    }
}
