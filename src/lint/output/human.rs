//! Human-readable output formatter.
//!
//! Formats lint findings for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{Severity, ValidationError};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Warning => Style::new().color256(208).bold(),
            Severity::Error => Style::new().red().bold(),
        }
    }

    fn dim(&self) -> Style {
        if self.use_color {
            Style::new().dim()
        } else {
            Style::new()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        findings: &[ValidationError],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for finding in findings {
            // Header line: error[rule-id]: message
            let header = format!("{}[{}]", finding.severity, finding.rule_id);
            writeln!(
                writer,
                "{}: {}",
                self.severity_style(finding.severity).apply_to(header),
                finding.message
            )?;

            writeln!(
                writer,
                "  {} {}",
                self.dim().apply_to("-->"),
                finding.source_file
            )?;
            writeln!(
                writer,
                "   {} {} ({})",
                self.dim().apply_to("= in:"),
                finding.resource_key,
                finding.field
            )?;

            writeln!(writer)?;
        }

        // Summary
        let error_count = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warning_count = findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
