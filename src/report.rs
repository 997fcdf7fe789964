// Batch counters and console report

use std::io::{self, Write};

/// Outcome of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files matched by the scan
    pub found: usize,
    pub processed: usize,
    pub failed: usize,
    /// (file name, error message) for every failed file, in processing order
    pub failures: Vec<(String, String)>,
}

impl BatchReport {
    pub fn new(found: usize) -> Self {
        Self {
            found,
            ..Default::default()
        }
    }

    /// Count a success and print `✓ <name> <detail>`.
    pub fn success<W: Write>(&mut self, out: &mut W, name: &str, detail: &str) -> io::Result<()> {
        self.processed += 1;
        if detail.is_empty() {
            writeln!(out, "✓ {}", name)
        } else {
            writeln!(out, "✓ {} {}", name, detail)
        }
    }

    /// Count a failure and print `✗ Error in <name>: <message>`.
    pub fn failure<W: Write>(
        &mut self,
        out: &mut W,
        name: &str,
        error: &dyn std::fmt::Display,
    ) -> io::Result<()> {
        let message = error.to_string();
        tracing::warn!(file = %name, error = %message, "File failed");
        self.failed += 1;
        writeln!(out, "✗ Error in {}: {}", name, message)?;
        self.failures.push((name.to_string(), message));
        Ok(())
    }

    pub fn has_errors(&self) -> bool {
        self.failed > 0
    }

    /// Print the final summary block.
    pub fn write_summary<W: Write>(&self, out: &mut W, unit: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Report ---")?;
        writeln!(out, "Total processed: {} {}", self.processed, unit)?;
        if self.has_errors() {
            writeln!(out, "Errors: {} {}", self.failed, unit)?;
        }
        Ok(())
    }
}
