//! Terminal output utilities
//!
//! Human-facing status lines on stdout, kept separate from the tracing log
//! stream on stderr.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Writes status messages, honoring quiet mode and color override
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }
}
