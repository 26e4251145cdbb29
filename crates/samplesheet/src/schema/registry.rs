//! Built-in schemas keyed by input type.

use indexmap::IndexSet;

use crate::validation::{ConditionKind, FieldValidator, RowValidator};

use super::types::{FieldDescription, SchemaDescription, SchemaTag};

use ConditionKind::{FileExists, Optional, Required, SimpleString};

/// Maps each [`SchemaTag`] to the row validator for that input type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Build the row validator for an input type.
    pub fn row_validator(&self, tag: SchemaTag) -> RowValidator {
        let sample = || FieldValidator::new("sample", &[Required, SimpleString]);
        let fastq_1 = || FieldValidator::new("fastq_1", &[Required, FileExists]);
        let fastq_2 = || FieldValidator::new("fastq_2", &[Optional, FileExists]);
        let contig = || FieldValidator::new("contig", &[Required, FileExists]);

        let fields = match tag {
            SchemaTag::Reads => vec![sample(), fastq_1(), fastq_2()],
            SchemaTag::ContigReads => vec![sample(), contig(), fastq_1(), fastq_2()],
            SchemaTag::Contig => vec![sample(), contig()],
            SchemaTag::BlastSeqs => vec![
                FieldValidator::new("analysis", &[Required, SimpleString]),
                FieldValidator::new("query_sequence", &[Required, FileExists]),
                FieldValidator::new("search_database", &[Required, FileExists]),
            ],
            SchemaTag::GroupedReads => vec![
                sample(),
                FieldValidator::new("group", &[Required, SimpleString]),
                FieldValidator::new("tag", &[Required, SimpleString]),
                fastq_1(),
                fastq_2(),
            ],
        };

        RowValidator::new(fields)
    }

    /// Columns the header must contain, in validator order.
    pub fn required_columns(&self, tag: SchemaTag) -> IndexSet<String> {
        required_columns_of(&self.row_validator(tag))
    }

    /// Describe a schema's fields and required columns.
    pub fn describe(&self, tag: SchemaTag) -> SchemaDescription {
        let validator = self.row_validator(tag);
        let fields = validator
            .field_validators()
            .iter()
            .map(|field| FieldDescription {
                name: field.field_name().to_string(),
                conditions: field.kinds().to_vec(),
                required: field.is_required(),
            })
            .collect();

        SchemaDescription {
            tag,
            fields,
            required_columns: required_columns_of(&validator).into_iter().collect(),
        }
    }
}

pub(crate) fn required_columns_of(validator: &RowValidator) -> IndexSet<String> {
    validator
        .field_validators()
        .iter()
        .filter(|field| field.is_required())
        .map(|field| field.field_name().to_string())
        .collect()
}
