//! Validation finding model.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The dataset a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// The client dataset.
    Clients,
    /// The worker dataset.
    Workers,
    /// The task dataset.
    Tasks,
}

impl EntityKind {
    /// Dataset name as consumers see it.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Workers => "workers",
            EntityKind::Tasks => "tasks",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// An identifier already appeared earlier in the same dataset.
    DuplicateId,
    /// A required field is empty or missing.
    MissingRequired,
    /// A numeric value falls outside its allowed domain.
    OutOfRange,
    /// A scalar failed to parse as its expected type.
    MalformedValue,
    /// A structured list or range failed its grammar.
    MalformedList,
    /// A JSON blob is syntactically invalid.
    BrokenJson,
    /// An ID reference does not resolve in the referenced dataset.
    UnknownReference,
    /// A required skill is offered by no worker.
    SkillCoverage,
}

/// A single validation finding attached to a row and field.
///
/// Findings are accumulated, never raised: the engine evaluates every row
/// against every applicable rule, and a malformed value in one field never
/// suppresses checks on sibling fields of the same row.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{entity}[{row_index}] {field}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ErrorKind,
    /// Dataset the finding belongs to.
    pub entity: EntityKind,
    /// 0-based row position in the source dataset.
    pub row_index: usize,
    /// Field the finding is attached to.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ErrorKind,
        entity: EntityKind,
        row_index: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity,
            row_index,
            field: field.into(),
            message: message.into(),
        }
    }
}
