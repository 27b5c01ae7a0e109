//! JSON output formatter.
//!
//! Formats lint findings as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{Severity, ValidationError};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiagnostic<'a> {
    kind: String,
    rule_id: &'a str,
    severity: String,
    resource_key: &'a str,
    field: &'a str,
    message: &'a str,
    source_file: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        findings: &[ValidationError],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let diagnostics: Vec<_> = findings
            .iter()
            .map(|f| JsonDiagnostic {
                kind: f.kind.to_string(),
                rule_id: f.rule_id.as_str(),
                severity: f.severity.to_string(),
                resource_key: &f.resource_key,
                field: &f.field,
                message: &f.message,
                source_file: &f.source_file,
            })
            .collect();

        let summary = JsonSummary {
            total: findings.len(),
            errors: findings
                .iter()
                .filter(|f| f.severity == Severity::Error)
                .count(),
            warnings: findings
                .iter()
                .filter(|f| f.severity == Severity::Warning)
                .count(),
        };

        let output = JsonOutput {
            diagnostics,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
