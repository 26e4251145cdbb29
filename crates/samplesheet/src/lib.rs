//! Samplesheet: schema validation for tabular pipeline inputs.
//!
//! A samplesheet is a delimited text table describing the samples, files and
//! grouping tags a pipeline run consumes. This crate checks such a table
//! against a named schema before any downstream stage touches it, and passes
//! valid files through unchanged.
//!
//! # Core Principles
//!
//! - **Fail-fast**: The first invalid row stops the run and is reported with
//!   its field and 1-based line number
//! - **Non-destructive**: A valid input is copied byte-for-byte
//! - **Dialect-agnostic**: Delimiter and quoting are sniffed, not assumed
//!
//! # Example
//!
//! ```no_run
//! use samplesheet::{SchemaTag, ValidationEngine};
//!
//! let engine = ValidationEngine::new();
//! let report = engine
//!     .run("samplesheet.csv", SchemaTag::Reads, "out/samplesheet.valid.csv")
//!     .unwrap();
//!
//! println!("Rows: {}", report.rows_validated);
//! println!("Format: {}", report.format);
//! ```

pub mod error;
pub mod input;
pub mod reporter;
pub mod schema;
pub mod validation;

mod engine;
mod report;

pub use engine::{EngineConfig, ScanSummary, ValidationEngine};
pub use error::{FieldError, Result, SamplesheetError};
pub use input::{Dialect, FormatSniffer, SnifferConfig};
pub use report::ValidationReport;
pub use reporter::{MemoryReporter, Reporter, Severity, TracingReporter};
pub use schema::{SchemaDescription, SchemaRegistry, SchemaTag};
pub use validation::{Condition, ConditionKind, FieldValidator, Row, RowValidator};
