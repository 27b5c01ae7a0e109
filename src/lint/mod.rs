//! Catalog linting.
//!
//! The lint system consists of:
//!
//! - **Findings** - [`ValidationError`] records with rule id and severity
//! - **Registry** - The known rules ([`RuleRegistry`])
//! - **Formatters** - Human and JSON renderings ([`LintFormatter`])
//!
//! [`lint_catalog`] runs a whole catalog: load, validate references, and
//! apply configured rule levels.
//!
//! # Example
//!
//! ```
//! use catalog_lint::lint::{RuleId, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("refs/owner-exists")).is_some());
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;

use std::path::Path;

use tracing::info;

pub use diagnostic::{ErrorKind, ValidationError};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::{RuleInfo, RuleRegistry};
pub use rule::{RuleId, Severity};

use crate::catalog::load_catalog;
use crate::config::LintConfig;
use crate::error::Result;
use crate::refs::validate_references;

/// Lint the catalog rooted at `root`.
///
/// Parse findings come first, then reference findings, each in catalog
/// order. Rules configured `off` are dropped and `warn` rules downgraded.
pub fn lint_catalog(root: &Path, config: &LintConfig) -> Result<Vec<ValidationError>> {
    let catalog = load_catalog(root, &config.ignore)?;

    let mut findings = catalog.errors;
    findings.extend(validate_references(&catalog.resources));

    let findings = apply_rule_levels(findings, config);
    info!(
        resources = catalog.resources.len(),
        findings = findings.len(),
        "linted catalog"
    );
    Ok(findings)
}

/// Apply configured rule levels to findings.
pub fn apply_rule_levels(
    findings: Vec<ValidationError>,
    config: &LintConfig,
) -> Vec<ValidationError> {
    findings
        .into_iter()
        .filter_map(|finding| match config.level(&finding.rule_id) {
            None => Some(finding),
            Some(level) => level
                .severity()
                .map(|severity| finding.with_severity(severity)),
        })
        .collect()
}
