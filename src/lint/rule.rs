//! Lint rule identifiers and severities.
//!
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)

use serde::Serialize;

/// A referenced resource does not exist under any candidate type.
pub const RESOURCE_EXISTS: &str = "refs/resource-exists";

/// A referenced resource exists but no version satisfies the request.
pub const VALID_VERSION_RANGE: &str = "refs/valid-version-range";

/// An owner does not exist as a user or team.
pub const OWNER_EXISTS: &str = "refs/owner-exists";

/// A document's frontmatter could not be parsed.
pub const VALID_FRONTMATTER: &str = "frontmatter/valid-yaml";

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, but does not fail the run unless `--strict`.
    Warning,
    /// Fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
