//! Structured sub-field shapes.
//!
//! Several columns carry text whose valid content follows an internal
//! grammar (comma lists, bracketed integer lists, dash ranges, JSON blobs).
//! The normalizer parses them once; parse failures are carried as a sentinel
//! rather than raised, so no row is ever dropped mid-pipeline. The field
//! validator turns sentinels into findings.

use serde::{Deserialize, Serialize};

/// Outcome of parsing a structured sub-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parsed<T> {
    /// The cell was empty or missing. Rules over this field do not apply.
    Absent,
    /// Successfully parsed content.
    Value(T),
    /// The raw text that failed to parse, kept for error messages.
    Unparseable(String),
}

impl<T> Parsed<T> {
    /// Whether the cell was empty or missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Parsed::Absent)
    }

    /// Whether parsing failed.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Parsed::Unparseable(_))
    }

    /// The parsed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Parsed::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Phase selection for a task: an explicit list or an inclusive range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhaseSpec {
    /// Explicit phase numbers, e.g. `[1,3,5]`.
    List(Vec<i64>),
    /// Inclusive range, e.g. `2-4`.
    Range { start: i64, end: i64 },
}

impl PhaseSpec {
    /// Expands the selection into concrete phase numbers.
    pub fn phases(&self) -> Vec<i64> {
        match self {
            PhaseSpec::List(xs) => xs.clone(),
            PhaseSpec::Range { start, end } => (*start..=*end).collect(),
        }
    }
}
