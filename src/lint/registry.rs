//! Rule registry.
//!
//! The [`RuleRegistry`] lists every rule that can appear in a finding, with
//! its description and default severity. Configuration is checked against it
//! and `catalog-lint rules` prints it.

use super::rule::{
    RuleId, Severity, OWNER_EXISTS, RESOURCE_EXISTS, VALID_FRONTMATTER, VALID_VERSION_RANGE,
};

/// Metadata for one lint rule.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub id: RuleId,
    pub description: &'static str,
    pub default_severity: Severity,
}

impl RuleInfo {
    pub fn new(id: &str, description: &'static str, default_severity: Severity) -> Self {
        Self {
            id: RuleId::new(id),
            description,
            default_severity,
        }
    }
}

/// Registry of known lint rules, in registration order.
pub struct RuleRegistry {
    rules: Vec<RuleInfo>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(RuleInfo::new(
            RESOURCE_EXISTS,
            "Referenced resources must exist in the catalog",
            Severity::Error,
        ));
        registry.register(RuleInfo::new(
            VALID_VERSION_RANGE,
            "Versioned references must match an existing version",
            Severity::Error,
        ));
        registry.register(RuleInfo::new(
            OWNER_EXISTS,
            "Owners must exist as a user or team",
            Severity::Error,
        ));
        registry.register(RuleInfo::new(
            VALID_FRONTMATTER,
            "Frontmatter must be a valid YAML mapping",
            Severity::Error,
        ));
        registry
    }

    /// Register a rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: RuleInfo) {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&RuleInfo> {
        self.rules.iter().find(|r| &r.id == id)
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &RuleInfo> {
        self.rules.iter()
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
