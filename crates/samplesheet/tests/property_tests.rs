//! Property-based tests for conditions, validators and the sniffer.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p samplesheet --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p samplesheet --test property_tests
//! ```

use proptest::prelude::*;

use samplesheet::validation::Presence;
use samplesheet::{
    Condition, ConditionKind, FieldValidator, FormatSniffer, Row, SchemaRegistry, SchemaTag,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary printable field values, including empty.
fn field_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\./ ]{0,40}"
}

/// Relative paths that will not exist under the test working directory.
fn missing_relative_path() -> impl Strategy<Value = String> {
    "missing_[a-z0-9]{8}/[a-z0-9_]{1,12}\\.fastq\\.gz"
}

/// Well-formed remote URLs.
fn remote_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http"), Just("s3"), Just("ftp")],
        "[a-z]{3,12}\\.(org|com|net)",
        "[a-z0-9_/]{1,30}",
    )
        .prop_map(|(scheme, host, path)| format!("{scheme}://{host}/{path}"))
}

fn schema_tag() -> impl Strategy<Value = SchemaTag> {
    prop::sample::select(SchemaTag::ALL.to_vec())
}

// =============================================================================
// Condition Properties
// =============================================================================

proptest! {
    #[test]
    fn required_passes_iff_non_empty(value in field_value()) {
        let outcome = Condition::Required.eval(&value);
        prop_assert_eq!(outcome.passed(), !value.is_empty());
    }

    #[test]
    fn optional_never_fails(value in field_value()) {
        let outcome = Condition::Optional.eval(&value);
        prop_assert!(outcome.passed());
        prop_assert_eq!(
            outcome.message(),
            if value.is_empty() { "Absent" } else { "Present" }
        );
        prop_assert_eq!(Presence::of(&value) == Presence::Absent, value.is_empty());
    }

    #[test]
    fn file_exists_accepts_remote_urls(url in remote_url()) {
        prop_assert!(Condition::FileExists.eval(&url).passed());
    }

    #[test]
    fn file_exists_needs_slashes_to_be_remote(
        scheme in prop_oneof![Just("http"), Just("https"), Just("ftp")],
        path in missing_relative_path(),
    ) {
        let value = format!("{scheme}:/{path}");
        prop_assert!(!Condition::FileExists.eval(&value).passed());
    }

    #[test]
    fn file_exists_message_names_missing_path(path in missing_relative_path()) {
        let outcome = Condition::FileExists.eval(&path);
        prop_assert!(!outcome.passed());
        prop_assert!(outcome.message().contains(&path));
    }

    #[test]
    fn evaluation_is_deterministic(value in field_value()) {
        for condition in [Condition::Required, Condition::Optional] {
            prop_assert_eq!(condition.eval(&value), condition.eval(&value));
        }
    }
}

// =============================================================================
// Validator Properties
// =============================================================================

proptest! {
    #[test]
    fn optional_file_field_skips_empty(path in missing_relative_path()) {
        let validator = FieldValidator::new(
            "fastq_2",
            &[ConditionKind::Optional, ConditionKind::FileExists],
        );
        prop_assert!(validator.validate("").is_ok());
        let err = validator.validate(&path).unwrap_err();
        prop_assert_eq!(err.field, "fastq_2");
    }

    #[test]
    fn required_columns_match_required_kinds(tag in schema_tag()) {
        let registry = SchemaRegistry::new();
        let expected: Vec<String> = registry
            .row_validator(tag)
            .field_validators()
            .iter()
            .filter(|f| f.kinds().iter().any(|k| {
                matches!(k, ConditionKind::Required | ConditionKind::SimpleString)
            }))
            .map(|f| f.field_name().to_string())
            .collect();
        let actual: Vec<String> = registry.required_columns(tag).into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn blanking_a_required_field_names_that_field(tag in schema_tag(), pick in any::<prop::sample::Index>()) {
        let validator = SchemaRegistry::new().row_validator(tag);
        let required: Vec<&FieldValidator> = validator
            .field_validators()
            .iter()
            .filter(|f| f.is_required())
            .collect();
        let target = required[pick.index(required.len())];

        // Everything before the target passes, so the target is the first failure.
        let row: Row = validator
            .field_validators()
            .iter()
            .map(|f| {
                let value = if f.field_name() == target.field_name() {
                    String::new()
                } else {
                    "https://example.org/data.fastq.gz".to_string()
                };
                (f.field_name().to_string(), value)
            })
            .collect();
        let err = validator.validate(&row).unwrap_err();
        prop_assert_eq!(err.field, target.field_name());
    }
}

// =============================================================================
// Sniffer Properties
// =============================================================================

proptest! {
    #[test]
    fn sniffer_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = FormatSniffer::new().detect(&data);
    }

    #[test]
    fn sniffer_recovers_generated_delimiter(
        delimiter in prop::sample::select(vec![b'\t', b',', b';', b'|']),
        columns in 2usize..6,
        rows in 1usize..8,
    ) {
        let sep = (delimiter as char).to_string();
        let mut data = String::new();
        for r in 0..=rows {
            let line: Vec<String> = (0..columns).map(|c| format!("v{r}_{c}")).collect();
            data.push_str(&line.join(&sep));
            data.push('\n');
        }
        let dialect = FormatSniffer::new().detect(data.as_bytes()).unwrap();
        prop_assert_eq!(dialect.delimiter, delimiter);
    }
}
