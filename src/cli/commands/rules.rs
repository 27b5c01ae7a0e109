//! Rules command implementation.
//!
//! The `catalog-lint rules` command lists the built-in rules.

use serde_json::json;

use crate::cli::args::RulesArgs;
use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(args: RulesArgs) -> Self {
        Self { args }
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();

        if self.args.json {
            let rules: Vec<_> = registry
                .iter()
                .map(|rule| {
                    json!({
                        "id": rule.id,
                        "severity": rule.default_severity,
                        "description": rule.description,
                    })
                })
                .collect();
            let output = serde_json::to_string_pretty(&rules).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        let width = registry.iter().map(|r| r.id.as_str().len()).max().unwrap_or(0);
        for rule in registry.iter() {
            ui.message(&format!(
                "{:<width$}  {:<7}  {}",
                rule.id.as_str(),
                rule.default_severity.to_string(),
                rule.description,
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}
