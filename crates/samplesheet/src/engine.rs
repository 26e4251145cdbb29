//! Validation engine: sniff, check the header, scan rows, copy.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Result, SamplesheetError};
use crate::input::{Dialect, FormatSniffer, SnifferConfig};
use crate::report::{hash_file, ValidationReport};
use crate::reporter::{Reporter, Severity, TracingReporter};
use crate::schema::{required_columns_of, SchemaRegistry, SchemaTag};
use crate::validation::Row;

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Format sniffer configuration.
    pub sniffer: SnifferConfig,
    /// Create missing parent directories of the output path.
    pub create_parent_dirs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sniffer: SnifferConfig::default(),
            create_parent_dirs: true,
        }
    }
}

/// What a full row scan found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub dialect: Dialect,
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Validates samplesheets against a schema and passes valid files through.
pub struct ValidationEngine {
    config: EngineConfig,
    registry: SchemaRegistry,
    sniffer: FormatSniffer,
    reporter: Box<dyn Reporter>,
}

impl ValidationEngine {
    /// Create an engine with default configuration that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let sniffer = FormatSniffer::with_config(config.sniffer.clone());
        Self {
            config,
            registry: SchemaRegistry::new(),
            sniffer,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Replace the sink used for failure messages.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validate `input` as `tag` and, if every row passes, copy it verbatim
    /// to `output`.
    ///
    /// The first failure is reported and returned; nothing is written to
    /// `output` in that case.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        tag: SchemaTag,
        output: impl AsRef<Path>,
    ) -> Result<ValidationReport> {
        let result = self.run_inner(input.as_ref(), tag, output.as_ref());
        self.report_failure(result)
    }

    /// Validate `input` as `tag` without producing any output.
    pub fn check(&self, input: impl AsRef<Path>, tag: SchemaTag) -> Result<ScanSummary> {
        let result = self.scan(input.as_ref(), tag);
        self.report_failure(result)
    }

    fn report_failure<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(ref e) = result {
            let severity = match e {
                SamplesheetError::InputNotFound { .. } => Severity::Error,
                _ => Severity::Critical,
            };
            self.reporter.report(severity, &e.to_string());
        }
        result
    }

    fn run_inner(&self, input: &Path, tag: SchemaTag, output: &Path) -> Result<ValidationReport> {
        let summary = self.scan(input, tag)?;
        // The copy is the last fallible step, so a failed run writes nothing.
        let (sha256, size_bytes) = hash_file(input)?;
        self.copy_output(input, output)?;

        info!(
            input = %input.display(),
            output = %output.display(),
            rows = summary.rows,
            "samplesheet validated"
        );

        Ok(ValidationReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            schema: tag,
            format: summary.dialect.format_name().to_string(),
            dialect: summary.dialect,
            columns: summary.columns,
            rows_validated: summary.rows,
            size_bytes,
            sha256,
            validated_at: Utc::now(),
        })
    }

    fn scan(&self, input: &Path, tag: SchemaTag) -> Result<ScanSummary> {
        if !input.is_file() {
            return Err(SamplesheetError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let row_validator = self.registry.row_validator(tag);
        let required = required_columns_of(&row_validator);

        let file = File::open(input).map_err(|e| SamplesheetError::io(input, e))?;
        let mut reader = BufReader::new(file);

        let sample = self
            .sniffer
            .read_sample(&mut reader)
            .map_err(|e| SamplesheetError::io(input, e))?;
        let dialect = self.sniffer.detect(&sample)?;
        debug!(format = dialect.format_name(), "dialect sniffed");

        let mut csv_reader = dialect.reader_builder().from_reader(reader);
        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|column| dialect.field(column).to_string())
            .collect();

        let missing: Vec<String> = required
            .iter()
            .filter(|column| !columns.contains(*column))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SamplesheetError::MissingColumns {
                required: required.into_iter().collect(),
                missing,
            });
        }
        debug!(columns = columns.len(), "header checked");

        let mut record = csv::StringRecord::new();
        let mut rows = 0;
        while csv_reader.read_record(&mut record)? {
            // Header is line 1.
            let line = rows + 2;
            let row: Row = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = record.get(i).map_or("", |v| dialect.field(v));
                    (column.clone(), value.to_string())
                })
                .collect();

            row_validator
                .validate(&row)
                .map_err(|error| SamplesheetError::InvalidRow { line, error })?;
            rows += 1;
        }
        debug!(rows, "rows scanned");

        Ok(ScanSummary {
            dialect,
            columns,
            rows,
        })
    }

    fn copy_output(&self, input: &Path, output: &Path) -> Result<()> {
        if self.config.create_parent_dirs {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| SamplesheetError::io(parent, e))?;
            }
        }

        if is_same_file(input, output) {
            debug!(output = %output.display(), "output is the input, nothing to copy");
            return Ok(());
        }

        if let Err(e) = fs::copy(input, output) {
            // Do not leave a truncated copy behind.
            let _ = fs::remove_file(output);
            return Err(SamplesheetError::io(output, e));
        }
        Ok(())
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
