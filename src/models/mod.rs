//! Intake domain models.
//!
//! Three entity kinds describe a resource-allocation problem:
//!
//! | Entity | Role |
//! |--------|------|
//! | Client | Requests tasks with a priority weight |
//! | Worker | Provides skills and per-phase availability |
//! | Task | Requires skills and occupies phases |
//!
//! Raw rows ([`RawRow`]) are the loosely-typed input shape; canonical records
//! ([`Client`], [`Worker`], [`Task`]) are the normalized output, tagged with
//! their original row index for error attribution.

mod client;
mod fields;
mod priority;
mod raw;
mod task;
mod worker;

pub use client::Client;
pub use fields::{Parsed, PhaseSpec};
pub use priority::{PrioritizationConfig, WeightError};
pub use raw::{RawRow, RawValue};
pub use task::Task;
pub use worker::Worker;
