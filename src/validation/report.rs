//! Validation report.
//!
//! One flat, stably-ordered sequence of findings: field errors per dataset
//! in fixed order (clients, workers, tasks), then referential errors. The
//! report is the single append-only accumulator; validators stay pure and
//! return immutable error sequences that get appended here.

use serde::{Deserialize, Serialize};

use super::{EntityKind, ErrorKind, ValidationError};

/// An ordered, read-only collection of validation findings.
///
/// No deduplication is performed; the same field can legitimately carry two
/// findings of different kinds. Callers gate on [`ValidationReport::is_empty`]
/// or render summaries from the filters below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of findings, preserving their order.
    pub fn append(&mut self, errors: Vec<ValidationError>) {
        self.errors.extend(errors);
    }

    /// Whether no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All findings in report order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates findings in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Findings attached to one dataset.
    pub fn for_entity(&self, entity: EntityKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.entity == entity)
    }

    /// Number of findings attached to one dataset.
    pub fn count_for_entity(&self, entity: EntityKind) -> usize {
        self.for_entity(entity).count()
    }

    /// Findings of one kind.
    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Number of findings of one kind.
    pub fn count_of_kind(&self, kind: ErrorKind) -> usize {
        self.of_kind(kind).count()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
