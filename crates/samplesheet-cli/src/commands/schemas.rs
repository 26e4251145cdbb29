//! Schemas command - list supported input types.

use colored::Colorize;
use samplesheet::{SamplesheetError, SchemaDescription, SchemaRegistry, SchemaTag};

pub fn run(json: bool) -> Result<(), SamplesheetError> {
    let registry = SchemaRegistry::new();
    let descriptions: Vec<SchemaDescription> =
        SchemaTag::ALL.iter().map(|tag| registry.describe(*tag)).collect();

    if json {
        let rendered = serde_json::to_string_pretty(&descriptions).map_err(|e| {
            tracing::error!("{e}");
            SamplesheetError::from(e)
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    for description in &descriptions {
        println!("{}", description.tag.to_string().cyan().bold());
        for field in &description.fields {
            let conditions: Vec<String> = field.conditions.iter().map(|c| c.to_string()).collect();
            let marker = if field.required {
                "required".yellow()
            } else {
                "optional".dimmed()
            };
            println!("  {:16} {:9} {}", field.name, marker, conditions.join(" + "));
        }
        println!();
    }

    Ok(())
}
