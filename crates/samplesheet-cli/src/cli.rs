//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use samplesheet::SchemaTag;
use std::path::PathBuf;

/// Samplesheet: validate tabular pipeline inputs
#[derive(Parser)]
#[command(name = "samplesheet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a samplesheet and copy it to the output path if valid
    Validate {
        /// Path to the samplesheet (delimiter is auto-detected)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Input type to validate against
        #[arg(
            short = 't',
            long,
            alias = "validation_type",
            default_value = "reads",
            value_parser = parse_schema_tag
        )]
        validation_type: SchemaTag,

        /// Where to write the validated copy (parent directories are created)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of lines sampled to detect the delimiter
        #[arg(long, default_value = "10")]
        sniff_lines: usize,

        /// Print the validation report as JSON on success
        #[arg(long)]
        json: bool,
    },

    /// List the supported input types and their columns
    Schemas {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_schema_tag(s: &str) -> Result<SchemaTag, String> {
    s.parse::<SchemaTag>().map_err(|_| {
        let names: Vec<&str> = SchemaTag::ALL.iter().map(|t| t.as_str()).collect();
        format!("Unknown validation type: {}. Use: {}.", s, names.join(", "))
    })
}
