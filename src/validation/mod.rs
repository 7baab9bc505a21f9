//! Integrity checks over normalized datasets.
//!
//! Two layers of rules:
//!
//! - **`field`**: local to one dataset — duplicate IDs, required fields,
//!   value ranges, structured-field grammars.
//! - **`referential`**: across datasets — requested task IDs must resolve,
//!   required skills must be covered by the worker pool.
//!
//! All findings are non-fatal and accumulated into a [`ValidationReport`];
//! the engine never stops at the first error.

mod error;
pub mod field;
pub mod referential;
mod report;

pub use error::{EntityKind, ErrorKind, ValidationError};
pub use report::ValidationReport;
