//! Validation and normalization engine for resource-allocation intake data.
//!
//! Ingests three related tabular datasets — clients, workers, tasks — as
//! loosely-typed rows and certifies that they are internally consistent
//! before a downstream scheduler consumes them. File decoding, rendering,
//! and export live upstream; this crate only receives already-decoded rows
//! and produces an ordered report of findings.
//!
//! # Pipeline
//!
//! raw rows → [`normalize`] → [`validation::field`] (per dataset) →
//! [`validation::referential`] (across datasets) →
//! [`validation::ValidationReport`]
//!
//! Every stage is pure and synchronous; the caller re-runs the full pass
//! whenever a dataset changes. Rows are never dropped: parse failures
//! become sentinels on the canonical records and findings in the report.
//!
//! # Modules
//!
//! - **`models`**: Raw row shapes and canonical records — `RawRow`,
//!   `Client`, `Worker`, `Task`, `PrioritizationConfig`
//! - **`normalize`**: Scalar coercion and structured sub-field parsing
//! - **`validation`**: Field rules, referential rules, and the report
//! - **`pipeline`**: One-call full pass over whichever datasets are present
//!
//! # Usage
//!
//! ```
//! use alloc_intake::pipeline::{self, DatasetInput};
//! use alloc_intake::models::RawRow;
//!
//! let input = DatasetInput::new().with_clients(vec![RawRow::new()
//!     .with("ClientID", "C1")
//!     .with("ClientName", "Acme")
//!     .with("PriorityLevel", 3.0)]);
//!
//! let outcome = pipeline::run(&input);
//! assert!(outcome.export_allowed());
//! ```

pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod validation;

pub use models::{Client, Parsed, PhaseSpec, PrioritizationConfig, RawRow, RawValue, Task, Worker};
pub use pipeline::{DatasetInput, PipelineRun};
pub use validation::{EntityKind, ErrorKind, ValidationError, ValidationReport};
