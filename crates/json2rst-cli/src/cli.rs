//! Command-line argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::Parser;
use json2rst_core::DEFAULT_TABULAR_COLUMNS;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Json2Rst - JSON Schema to reStructuredText documentation generator
///
/// Converts a root schema file and every schema it transitively references
/// into one reStructuredText page per schema, ready for a Sphinx toctree.
#[derive(Parser, Debug)]
#[command(
    name = "json2rst",
    version,
    author,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the root schema file (e.g. device.schema.json)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,

    /// Directory receiving the generated .rst files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Layout written verbatim into each table's tabularcolumns directive
    #[arg(
        value_name = "TABULAR_COLUMNS",
        env = "JSON2RST_TABULAR_COLUMNS",
        default_value = DEFAULT_TABULAR_COLUMNS
    )]
    pub tabular_columns: String,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
