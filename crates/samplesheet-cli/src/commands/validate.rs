//! Validate command - check a samplesheet and pass it through.

use std::path::PathBuf;

use colored::Colorize;
use samplesheet::{EngineConfig, SamplesheetError, SchemaTag, SnifferConfig, ValidationEngine};

pub fn run(
    input: PathBuf,
    validation_type: SchemaTag,
    output: PathBuf,
    sniff_lines: usize,
    json: bool,
) -> Result<(), SamplesheetError> {
    let config = EngineConfig {
        sniffer: SnifferConfig {
            sample_lines: sniff_lines,
            ..SnifferConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = ValidationEngine::with_config(config);

    let report = engine.run(&input, validation_type, &output)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
            tracing::error!("{e}");
            SamplesheetError::from(e)
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {}, {})",
        "Validated".green().bold(),
        input.display().to_string().white(),
        report.rows_validated.to_string().white().bold(),
        report.format,
        validation_type.to_string().cyan()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
