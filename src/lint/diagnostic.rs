//! Lint findings.
//!
//! This module provides [`ValidationError`], the record produced for every
//! broken reference or unparseable document. Findings are data: a run that
//! finds problems still succeeds and returns them.

use serde::Serialize;

use super::rule::{RuleId, Severity, VALID_FRONTMATTER};

/// Which stage produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A cross-resource reference that does not resolve.
    Reference,
    /// Frontmatter that could not be read.
    Parse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Reference => write!(f, "reference"),
            ErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stage that produced this finding.
    pub kind: ErrorKind,
    /// `<type>/<id>` of the resource the finding is about.
    pub resource_key: String,
    /// Frontmatter path of the offending value, e.g. `steps[0].message`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Catalog-relative path of the document.
    pub source_file: String,
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// Severity after configuration is applied.
    pub severity: Severity,
}

impl ValidationError {
    /// Create an unresolved-reference finding with error severity.
    pub fn reference(
        resource_key: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
        source_file: impl Into<String>,
        rule_id: RuleId,
    ) -> Self {
        Self {
            kind: ErrorKind::Reference,
            resource_key: resource_key.into(),
            field: field.into(),
            message: message.into(),
            source_file: source_file.into(),
            rule_id,
            severity: Severity::Error,
        }
    }

    /// Create a frontmatter parse finding with error severity.
    pub fn parse(
        resource_key: impl Into<String>,
        source_file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::Parse,
            resource_key: resource_key.into(),
            field: "frontmatter".to_string(),
            message: message.into(),
            source_file: source_file.into(),
            rule_id: RuleId::new(VALID_FRONTMATTER),
            severity: Severity::Error,
        }
    }

    /// Override the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
