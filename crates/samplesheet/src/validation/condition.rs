//! Single-field validity rules.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Condition names as they appear in a schema definition.
///
/// `SimpleString` is an alias of `Required` kept for schema readability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    Required,
    SimpleString,
    Optional,
    FileExists,
    FolderExists,
}

impl ConditionKind {
    /// Whether a field carrying this kind makes its column mandatory.
    pub fn marks_required(&self) -> bool {
        matches!(self, ConditionKind::Required | ConditionKind::SimpleString)
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionKind::Required => "Required",
            ConditionKind::SimpleString => "SimpleString",
            ConditionKind::Optional => "Optional",
            ConditionKind::FileExists => "FileExists",
            ConditionKind::FolderExists => "FolderExists",
        };
        f.write_str(name)
    }
}

/// Whether an optional value was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            Presence::Absent
        } else {
            Presence::Present
        }
    }
}

/// Result of evaluating one condition against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Optional conditions always pass and report presence instead.
    Optional(Presence),
    Failed(String),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }

    /// Human-readable message; empty for a plain pass.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Passed => "",
            Outcome::Optional(Presence::Present) => "Present",
            Outcome::Optional(Presence::Absent) => "Absent",
            Outcome::Failed(message) => message,
        }
    }
}

/// A stateless rule applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Required,
    Optional,
    FileExists,
    FolderExists,
}

impl From<ConditionKind> for Condition {
    fn from(kind: ConditionKind) -> Self {
        match kind {
            ConditionKind::Required | ConditionKind::SimpleString => Condition::Required,
            ConditionKind::Optional => Condition::Optional,
            ConditionKind::FileExists => Condition::FileExists,
            ConditionKind::FolderExists => Condition::FolderExists,
        }
    }
}

impl Condition {
    /// Evaluate the condition.
    ///
    /// `FileExists` and `FolderExists` stat the filesystem on every call.
    pub fn eval(&self, value: &str) -> Outcome {
        match self {
            Condition::Required => {
                if value.is_empty() {
                    Outcome::Failed("Field is required.".to_string())
                } else {
                    Outcome::Passed
                }
            }
            Condition::Optional => Outcome::Optional(Presence::of(value)),
            Condition::FileExists => {
                if is_remote_reference(value) || Path::new(value).is_file() {
                    Outcome::Passed
                } else {
                    Outcome::Failed(format!("File {value} doesn't exist."))
                }
            }
            Condition::FolderExists => {
                if Path::new(value).is_dir() {
                    Outcome::Passed
                } else {
                    Outcome::Failed(format!("Directory {value} doesn't exist."))
                }
            }
        }
    }
}

/// A value with both a scheme and a host is left for the consuming
/// pipeline to resolve.
///
/// The host must be written out as `scheme://host`. The URL parser infers a
/// host for special schemes from forms like `http:/a/b` or `http:a`, which
/// are local-looking paths here.
fn is_remote_reference(value: &str) -> bool {
    let has_authority = value
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"));
    if !has_authority {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_required() {
        assert_eq!(Condition::Required.eval("S1"), Outcome::Passed);
        let outcome = Condition::Required.eval("");
        assert!(!outcome.passed());
        assert_eq!(outcome.message(), "Field is required.");
    }

    #[test]
    fn test_simple_string_is_required() {
        assert_eq!(
            Condition::from(ConditionKind::SimpleString),
            Condition::Required
        );
        assert!(ConditionKind::SimpleString.marks_required());
        assert!(!ConditionKind::Optional.marks_required());
        assert!(!ConditionKind::FileExists.marks_required());
    }

    #[test]
    fn test_optional_reports_presence() {
        let absent = Condition::Optional.eval("");
        assert!(absent.passed());
        assert_eq!(absent, Outcome::Optional(Presence::Absent));
        assert_eq!(absent.message(), "Absent");

        let present = Condition::Optional.eval("x");
        assert!(present.passed());
        assert_eq!(present.message(), "Present");
    }

    #[test]
    fn test_file_exists_local() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(Condition::FileExists.eval(path), Outcome::Passed);
    }

    #[test]
    fn test_file_exists_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert!(!Condition::FileExists.eval(path).passed());
    }

    #[test]
    fn test_file_exists_missing_relative_path() {
        let outcome = Condition::FileExists.eval("no/such/reads_R1.fastq.gz");
        assert_eq!(
            outcome,
            Outcome::Failed("File no/such/reads_R1.fastq.gz doesn't exist.".to_string())
        );
    }

    #[test]
    fn test_file_exists_remote_url_passes() {
        assert!(Condition::FileExists
            .eval("https://example.org/reads.fastq.gz")
            .passed());
        assert!(Condition::FileExists
            .eval("s3://bucket/run1/reads.fastq.gz")
            .passed());
    }

    #[test]
    fn test_file_exists_url_without_host_is_local() {
        assert!(!Condition::FileExists
            .eval("file:///definitely/not/here.fastq")
            .passed());
    }

    #[test]
    fn test_file_exists_url_without_slashes_is_local() {
        for value in [
            "http:/no/such.fq",
            "http:no_such.fq",
            "https:/definitely/not/here.fq",
        ] {
            let outcome = Condition::FileExists.eval(value);
            assert_eq!(outcome, Outcome::Failed(format!("File {value} doesn't exist.")));
        }
    }

    #[test]
    fn test_folder_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(Condition::FolderExists.eval(path), Outcome::Passed);

        let outcome = Condition::FolderExists.eval("no/such/dir");
        assert_eq!(outcome.message(), "Directory no/such/dir doesn't exist.");
    }

    #[test]
    fn test_folder_exists_rejects_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(!Condition::FolderExists.eval(path).passed());
    }
}
