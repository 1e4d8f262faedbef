//! Json2Rst CLI - generate reStructuredText documentation from JSON Schema
//!
//! This is the entry point for the json2rst application: it parses
//! arguments, initializes logging, and runs the schema-to-rst conversion
//! over the root schema file and everything it references.

mod cli;
mod error;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use error::{Error, Result};
use json2rst_core::Converter;
use logging::LoggingConfig;
use output::OutputWriter;
use std::fs;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(schema = %cli.schema_file.display()))]
fn run(cli: Cli) -> Result<()> {
    let mut output = OutputWriter::new(cli.use_color(), cli.quiet);

    if !cli.schema_file.exists() {
        return Err(Error::FileNotFound {
            path: cli.schema_file,
        });
    }
    fs::create_dir_all(&cli.output_dir)?;

    tracing::info!(
        schema = %cli.schema_file.display(),
        output_dir = %cli.output_dir.display(),
        "Starting conversion"
    );
    output.info(&format!("Converting {}", cli.schema_file.display()))?;

    let mut converter = Converter::new(&cli.schema_file, &cli.output_dir);
    converter.set_tabular_columns(&cli.tabular_columns);
    let written = converter.run()?;

    output.success(&format!(
        "Wrote {} document(s) to {}",
        written,
        cli.output_dir.display()
    ))?;
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    // Create logging configuration from CLI args and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
