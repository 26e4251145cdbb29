//! Error types for samplesheet validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single condition failure on one field of one row.
///
/// Returned by field and row validators as plain data. Only the engine
/// knows which line a row came from, so the line number is attached there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Column the failing validator is bound to.
    pub field: String,
    /// Message produced by the failing condition.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Main error type for samplesheet operations.
#[derive(Debug, Error)]
pub enum SamplesheetError {
    /// The requested input type has no registered schema.
    #[error("Validation type not supported: '{0}'")]
    UnknownSchema(String),

    /// The input path does not point at an existing file.
    #[error("The given input file {} was not found!", .path.display())]
    InputNotFound { path: PathBuf },

    /// The header lacks one or more required columns.
    #[error(
        "The sample sheet must contain these column headers: {}. Missing: {}.",
        .required.join(", "),
        .missing.join(", ")
    )]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    /// A row failed a field condition.
    #[error("{error} On line {line}.")]
    InvalidRow {
        /// 1-based line number; the header is line 1.
        line: usize,
        #[source]
        error: FieldError,
    },

    /// The delimiter/quoting dialect could not be inferred.
    #[error("Could not determine the table format: {0}")]
    Sniff(String),

    /// Error reading or writing a file.
    #[error("IO error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SamplesheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    ///
    /// A missing input file exits with 2; every other failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for samplesheet operations.
pub type Result<T> = std::result::Result<T, SamplesheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("sample", "Field is required.");
        assert_eq!(err.to_string(), "sample: Field is required.");
    }

    #[test]
    fn test_invalid_row_display() {
        let err = SamplesheetError::InvalidRow {
            line: 3,
            error: FieldError::new("sample", "Field is required."),
        };
        assert_eq!(err.to_string(), "sample: Field is required. On line 3.");
    }

    #[test]
    fn test_missing_columns_names_every_column() {
        let err = SamplesheetError::MissingColumns {
            required: vec!["sample".into(), "fastq_1".into()],
            missing: vec!["sample".into(), "fastq_1".into()],
        };
        let message = err.to_string();
        assert!(message.contains("Missing: sample, fastq_1."));
    }

    #[test]
    fn test_exit_codes() {
        let not_found = SamplesheetError::InputNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(SamplesheetError::Sniff("empty".into()).exit_code(), 1);
        assert_eq!(
            SamplesheetError::UnknownSchema("bogus".into()).exit_code(),
            1
        );
    }
}
