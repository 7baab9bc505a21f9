//! Raw row model.
//!
//! Upstream decoders (CSV readers, spreadsheet importers) hand the engine
//! already-parsed rows whose cells are loosely typed: the same column may
//! arrive as text in one file and as a native number in another. `RawValue`
//! is the closed set of shapes a cell can take; the normalizer is the only
//! component that consumes raw scalars.

use serde::{Deserialize, Serialize};

/// A single cell value as delivered by an upstream decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Textual cell content.
    Text(String),
    /// Numeric cell content (spreadsheet decoders produce doubles).
    Number(f64),
    /// A cell the decoder already materialized as an integer list.
    Integers(Vec<i64>),
    /// Empty or missing cell.
    Absent,
}

impl RawValue {
    /// Whether this cell carries no content (absent or blank text).
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<Vec<i64>> for RawValue {
    fn from(xs: Vec<i64>) -> Self {
        RawValue::Integers(xs)
    }
}

/// An ordered mapping from column name to cell value.
///
/// Column names come from the source file's header line and are matched by
/// exact string equality. Insertion order is preserved; lookups take the
/// first matching column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, RawValue)>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell (builder style).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.cells.push((column.into(), value.into()));
        self
    }

    /// Adds a cell in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.cells.push((column.into(), value.into()));
    }

    /// Looks up a cell by exact column name.
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
