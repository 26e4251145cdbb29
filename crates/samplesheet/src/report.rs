//! Summary of a successful validation run.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{Result, SamplesheetError};
use crate::input::Dialect;
use crate::schema::SchemaTag;

/// Metadata about a samplesheet that passed validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Validated input file.
    pub input: PathBuf,
    /// Copy written for downstream stages.
    pub output: PathBuf,
    /// Schema the rows were checked against.
    pub schema: SchemaTag,
    /// Detected dialect.
    pub dialect: Dialect,
    /// Format name (csv, tsv, etc.).
    pub format: String,
    /// Column names from the header row.
    pub columns: Vec<String>,
    /// Number of data rows checked (excluding header).
    pub rows_validated: usize,
    /// Input size in bytes.
    pub size_bytes: u64,
    /// SHA-256 of the input bytes.
    pub sha256: String,
    /// When validation finished.
    pub validated_at: DateTime<Utc>,
}

/// Hash a file, returning `sha256:<hex>` and its size.
pub(crate) fn hash_file(path: &Path) -> Result<(String, u64)> {
    let mut file = File::open(path).map_err(|e| SamplesheetError::io(path, e))?;
    let mut hasher = Sha256::new();
    let size_bytes = io::copy(&mut file, &mut hasher).map_err(|e| SamplesheetError::io(path, e))?;
    Ok((format!("sha256:{:x}", hasher.finalize()), size_bytes))
}
