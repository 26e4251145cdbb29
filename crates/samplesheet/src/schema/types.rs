//! Input type tags and schema descriptions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SamplesheetError;
use crate::validation::ConditionKind;

/// Input types a samplesheet can be validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaTag {
    /// Single or paired reads per sample.
    Reads,
    /// Reads plus a sample label, group and tag.
    GroupedReads,
    /// An assembled contig with its reads.
    ContigReads,
    /// An assembled contig only.
    Contig,
    /// Query sequences against a search database.
    BlastSeqs,
}

impl SchemaTag {
    /// Every supported tag, in CLI listing order.
    pub const ALL: [SchemaTag; 5] = [
        SchemaTag::Reads,
        SchemaTag::GroupedReads,
        SchemaTag::ContigReads,
        SchemaTag::Contig,
        SchemaTag::BlastSeqs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaTag::Reads => "reads",
            SchemaTag::GroupedReads => "grouped_reads",
            SchemaTag::ContigReads => "contig_reads",
            SchemaTag::Contig => "contig",
            SchemaTag::BlastSeqs => "blast_seqs",
        }
    }
}

impl FromStr for SchemaTag {
    type Err = SamplesheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| SamplesheetError::UnknownSchema(s.to_string()))
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field entry in a [`SchemaDescription`].
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescription {
    pub name: String,
    pub conditions: Vec<ConditionKind>,
    pub required: bool,
}

/// Serializable summary of one schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDescription {
    pub tag: SchemaTag,
    pub fields: Vec<FieldDescription>,
    pub required_columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_tag() {
        for tag in SchemaTag::ALL {
            assert_eq!(tag.as_str().parse::<SchemaTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "paired_reads".parse::<SchemaTag>().unwrap_err();
        assert!(matches!(err, SamplesheetError::UnknownSchema(ref t) if t == "paired_reads"));
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        let json = serde_json::to_string(&SchemaTag::BlastSeqs).unwrap();
        assert_eq!(json, "\"blast_seqs\"");
    }
}
