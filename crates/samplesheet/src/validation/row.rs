//! Record-level validation.

use indexmap::IndexMap;

use crate::error::FieldError;

use super::field::FieldValidator;

/// One record: column name to raw value, in header order.
pub type Row = IndexMap<String, String>;

/// An ordered list of field validators applied to each record.
#[derive(Debug, Clone)]
pub struct RowValidator {
    field_validators: Vec<FieldValidator>,
}

impl RowValidator {
    pub fn new(field_validators: Vec<FieldValidator>) -> Self {
        Self { field_validators }
    }

    pub fn field_validators(&self) -> &[FieldValidator] {
        &self.field_validators
    }

    /// Validate a record, stopping at the first failing field.
    ///
    /// Fields are visited in validator order, not column order. A column
    /// missing from the record is validated as an empty value.
    pub fn validate(&self, row: &Row) -> Result<(), FieldError> {
        for validator in &self.field_validators {
            let value = row
                .get(validator.field_name())
                .map(String::as_str)
                .unwrap_or("");
            validator.validate(value)?;
        }
        Ok(())
    }
}
