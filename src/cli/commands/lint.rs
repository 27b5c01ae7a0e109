//! Lint command implementation.
//!
//! The `catalog-lint lint` command checks every reference in a catalog and
//! reports the broken ones.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::LintArgs;
use crate::config::load_config;
use crate::error::{LintError, Result};
use crate::lint::{
    lint_catalog, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, RuleRegistry,
    Severity, ValidationError,
};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    args: LintArgs,
    config_path: Option<PathBuf>,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(args: LintArgs, config_path: Option<PathBuf>) -> Self {
        Self { args, config_path }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Get the catalog root.
    pub fn catalog_root(&self) -> &Path {
        &self.args.dir
    }

    /// Format findings using the requested formatter.
    fn format_output(&self, findings: &[ValidationError]) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(findings, &mut output)?,
            OutputFormat::Human => {
                HumanFormatter::new(should_use_colors()).format(findings, &mut output)?
            }
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.catalog_root();
        if !root.is_dir() {
            return Err(LintError::CatalogNotFound {
                path: root.to_path_buf(),
            });
        }

        let config = load_config(root, self.config_path.as_deref())?;
        config.validate(&RuleRegistry::with_builtins())?;
        debug!(?config, "resolved lint config");

        let findings = lint_catalog(root, &config)?;

        let has_errors = findings.iter().any(|f| f.severity == Severity::Error);
        let has_warnings = findings.iter().any(|f| f.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        if findings.is_empty() && self.args.format == OutputFormat::Human {
            ui.success("No broken references found");
        } else {
            let output = self.format_output(&findings)?;
            ui.message(output.trim_end());
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup_catalog() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "services/Orders/index.mdx",
            "---\nid: Orders\nversion: 1.0.0\nsends:\n  - id: OrderPlaced\nowners:\n  - dboyne\n---\n",
        );
        write(
            temp.path(),
            "events/OrderPlaced/index.mdx",
            "---\nid: OrderPlaced\nversion: 1.0.0\n---\n",
        );
        write(temp.path(), "users/dboyne.mdx", "---\nid: dboyne\n---\n");
        temp
    }

    fn command(root: &Path) -> LintCommand {
        LintCommand::new(
            LintArgs {
                dir: root.to_path_buf(),
                ..Default::default()
            },
            None,
        )
    }

    #[test]
    fn clean_catalog_succeeds() {
        let temp = setup_catalog();
        let mut ui = MockUI::new();

        let result = command(temp.path()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("No broken references"));
    }

    #[test]
    fn broken_reference_fails() {
        let temp = setup_catalog();
        write(
            temp.path(),
            "domains/Sales/index.mdx",
            "---\nid: Sales\nservices:\n  - id: Payments\n---\n",
        );
        let mut ui = MockUI::new();

        let result = command(temp.path()).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Referenced service \"Payments\" does not exist"));
        assert!(ui.has_message("Found 1 error(s) and 0 warning(s)"));
    }

    #[test]
    fn json_output_for_clean_catalog() {
        let temp = setup_catalog();
        let cmd = LintCommand::new(
            LintArgs {
                dir: temp.path().to_path_buf(),
                format: OutputFormat::Json,
                strict: false,
            },
            None,
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["summary"]["total"], 0);
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let temp = setup_catalog();
        write(
            temp.path(),
            "events/OrderPlaced/index.mdx",
            "---\nid: OrderPlaced\nversion: 1.0.0\nowners:\n  - ghost\n---\n",
        );
        write(
            temp.path(),
            ".catalog-lint.yml",
            "rules:\n  refs/owner-exists: warn\n",
        );

        let mut ui = MockUI::new();
        let result = command(temp.path()).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("warning[refs/owner-exists]"));

        let strict = LintCommand::new(
            LintArgs {
                dir: temp.path().to_path_buf(),
                format: OutputFormat::Human,
                strict: true,
            },
            None,
        );
        let mut ui = MockUI::new();
        let result = strict.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = command(&temp.path().join("nope"))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LintError::CatalogNotFound { .. }));
    }

    #[test]
    fn unknown_rule_in_config_is_fatal() {
        let temp = setup_catalog();
        write(
            temp.path(),
            ".catalog-lint.yml",
            "rules:\n  refs/made-up: off\n",
        );
        let mut ui = MockUI::new();

        let err = command(temp.path()).execute(&mut ui).unwrap_err();

        assert!(matches!(err, LintError::ConfigValidationError { .. }));
    }

    #[test]
    fn explicit_config_path_is_used() {
        let temp = setup_catalog();
        write(
            temp.path(),
            "domains/Sales/index.mdx",
            "---\nservices:\n  - id: Payments\n---\n",
        );
        let config = temp.path().join("custom.yml");
        fs::write(&config, "rules:\n  refs/resource-exists: off\n").unwrap();

        let cmd = LintCommand::new(
            LintArgs {
                dir: temp.path().to_path_buf(),
                ..Default::default()
            },
            Some(config),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
    }
}
