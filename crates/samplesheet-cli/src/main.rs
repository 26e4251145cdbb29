//! Samplesheet CLI - validate tabular pipeline inputs.

mod cli;
mod commands;

use std::io::IsTerminal;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let result = match cli.command {
        Commands::Validate {
            input,
            validation_type,
            output,
            sniff_lines,
            json,
        } => commands::validate::run(input, validation_type, output, sniff_lines, json),

        Commands::Schemas { json } => commands::schemas::run(json),
    };

    // Failures have already been reported by the engine.
    if let Err(e) = result {
        std::process::exit(e.exit_code());
    }
}
