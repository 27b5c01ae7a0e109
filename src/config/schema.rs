//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LintError, Result};
use crate::lint::{RuleId, RuleRegistry, Severity};

/// Per-rule reporting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Report as an error.
    Error,
    /// Report as a warning.
    Warn,
    /// Do not report.
    Off,
}

impl RuleLevel {
    /// Severity to report at, or `None` when the rule is off.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Error => Some(Severity::Error),
            Self::Warn => Some(Severity::Warning),
            Self::Off => None,
        }
    }
}

/// Contents of `.catalog-lint.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Rule id → level overrides.
    pub rules: BTreeMap<String, RuleLevel>,

    /// Glob patterns, relative to the catalog root, of documents to skip.
    pub ignore: Vec<String>,
}

impl LintConfig {
    /// Reject rule overrides for rules that do not exist.
    pub fn validate(&self, registry: &RuleRegistry) -> Result<()> {
        let unknown: Vec<&str> = self
            .rules
            .keys()
            .filter(|id| registry.get(&RuleId::new(id.as_str())).is_none())
            .map(String::as_str)
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(LintError::ConfigValidationError {
                message: format!("unknown rule(s): {}", unknown.join(", ")),
            })
        }
    }

    /// Configured level for a rule, if overridden.
    pub fn level(&self, rule_id: &RuleId) -> Option<RuleLevel> {
        self.rules.get(rule_id.as_str()).copied()
    }
}
