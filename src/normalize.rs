//! Record normalization.
//!
//! Converts raw heterogeneous rows into canonical entity records: coerces
//! scalars, splits comma lists, and parses structured sub-fields (bracketed
//! integer lists, phase ranges, JSON blobs).
//!
//! Two guarantees hold for every pass:
//!
//! - **Row-count invariant**: the output has exactly one record per input
//!   row, in input order, even when every field is malformed.
//! - **No exceptions**: parse failures never surface here. They ride along
//!   as [`Parsed::Unparseable`] sentinels and become findings in the field
//!   validator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Client, Parsed, PhaseSpec, RawRow, RawValue, Task, Worker};

/// Grammar for an explicit phase list, e.g. `[1,2,3]`.
static PHASE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\d+(,\d+)*\]$").expect("phase list pattern"));

/// Grammar for an inclusive phase range, e.g. `2-4`.
static PHASE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+-\d+$").expect("phase range pattern"));

/// Normalizes client rows. Output length always equals input length.
pub fn normalize_clients(rows: &[RawRow]) -> Vec<Client> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Client {
            row_index: index,
            id: text(row, "ClientID"),
            name: text(row, "ClientName"),
            priority_level: number(row, "PriorityLevel"),
            requested_task_ids: comma_list(row, "RequestedTaskIDs"),
            attributes_json: json_blob(row, "AttributesJSON"),
        })
        .collect()
}

/// Normalizes worker rows. Output length always equals input length.
pub fn normalize_workers(rows: &[RawRow]) -> Vec<Worker> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Worker {
            row_index: index,
            id: text(row, "WorkerID"),
            name: text(row, "WorkerName"),
            skills: comma_list(row, "Skills"),
            available_slots: integer_list(row, "AvailableSlots"),
            max_load_per_phase: number(row, "MaxLoadPerPhase"),
        })
        .collect()
}

/// Normalizes task rows. Output length always equals input length.
pub fn normalize_tasks(rows: &[RawRow]) -> Vec<Task> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Task {
            row_index: index,
            id: text(row, "TaskID"),
            name: text(row, "TaskName"),
            required_skills: comma_list(row, "RequiredSkills"),
            preferred_phases: phase_spec(row, "PreferredPhases"),
            duration_phases: number(row, "DurationPhases"),
            max_concurrent: number(row, "MaxConcurrent"),
        })
        .collect()
}

/// Renders an integral double without a trailing `.0`, the way spreadsheet
/// decoders print IDs that arrived as numbers.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Coerces a cell to trimmed text. Missing and absent cells yield an empty
/// string; the validators treat empty as "not supplied".
fn text(row: &RawRow, column: &str) -> String {
    match row.get(column) {
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Number(n)) => format_number(*n),
        Some(RawValue::Integers(xs)) => xs
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(","),
        Some(RawValue::Absent) | None => String::new(),
    }
}

/// Coerces a cell to a number, carrying failures as a sentinel.
fn number(row: &RawRow, column: &str) -> Parsed<f64> {
    match row.get(column) {
        Some(RawValue::Number(n)) => Parsed::Value(*n),
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Parsed::Absent
            } else {
                match trimmed.parse::<f64>() {
                    Ok(n) => Parsed::Value(n),
                    Err(_) => Parsed::Unparseable(trimmed.to_string()),
                }
            }
        }
        Some(RawValue::Integers(_)) => Parsed::Unparseable(text(row, column)),
        Some(RawValue::Absent) | None => Parsed::Absent,
    }
}

/// Splits a comma-separated cell into trimmed entries, dropping empties.
fn comma_list(row: &RawRow, column: &str) -> Vec<String> {
    text(row, column)
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a bracketed integer list, permissively.
///
/// A native integer list passes through. Text gets single quotes normalized
/// to double quotes and is parsed as a JSON array; numeric-string elements
/// are accepted. Any non-numeric element or non-list shape yields a single
/// sentinel for the whole cell.
fn integer_list(row: &RawRow, column: &str) -> Parsed<Vec<i64>> {
    let raw = match row.get(column) {
        Some(RawValue::Integers(xs)) => return Parsed::Value(xs.clone()),
        Some(RawValue::Number(n)) => return Parsed::Unparseable(format_number(*n)),
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Absent) | None => return Parsed::Absent,
    };
    if raw.is_empty() {
        return Parsed::Absent;
    }

    let normalized = raw.replace('\'', "\"");
    let items = match serde_json::from_str::<serde_json::Value>(&normalized) {
        Ok(serde_json::Value::Array(items)) => items,
        _ => return Parsed::Unparseable(raw),
    };

    let mut slots = Vec::with_capacity(items.len());
    for item in &items {
        match as_integer(item) {
            Some(slot) => slots.push(slot),
            None => return Parsed::Unparseable(raw),
        }
    }
    Parsed::Value(slots)
}

/// Extracts an integer from a JSON array element, accepting integral
/// doubles and numeric strings (a side effect of quote normalization).
fn as_integer(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Parses a phase selection: `[a,b,c]` or an inclusive `a-b` range.
/// Anything else is a sentinel.
fn phase_spec(row: &RawRow, column: &str) -> Parsed<PhaseSpec> {
    let raw = match row.get(column) {
        Some(RawValue::Integers(xs)) => return Parsed::Value(PhaseSpec::List(xs.clone())),
        Some(RawValue::Number(n)) => format_number(*n),
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Absent) | None => return Parsed::Absent,
    };
    if raw.is_empty() {
        return Parsed::Absent;
    }

    if PHASE_LIST.is_match(&raw) {
        let phases: Result<Vec<i64>, _> = raw[1..raw.len() - 1]
            .split(',')
            .map(|p| p.parse::<i64>())
            .collect();
        return match phases {
            Ok(phases) => Parsed::Value(PhaseSpec::List(phases)),
            Err(_) => Parsed::Unparseable(raw),
        };
    }
    if PHASE_RANGE.is_match(&raw) {
        if let Some((start, end)) = raw.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) {
                return Parsed::Value(PhaseSpec::Range { start, end });
            }
        }
    }
    Parsed::Unparseable(raw)
}

/// Parses a free-form JSON blob. Content stays untyped; only syntax matters.
fn json_blob(row: &RawRow, column: &str) -> Parsed<serde_json::Value> {
    let raw = match row.get(column) {
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Number(n)) => return Parsed::Value(serde_json::json!(n)),
        Some(RawValue::Integers(xs)) => return Parsed::Value(serde_json::json!(xs)),
        Some(RawValue::Absent) | None => return Parsed::Absent,
    };
    if raw.is_empty() {
        return Parsed::Absent;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Parsed::Value(value),
        Err(_) => Parsed::Unparseable(raw),
    }
}
