//! Integration tests for the catalog-lint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small catalog where every reference resolves.
fn setup_catalog() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "domains/Sales/index.mdx",
        r#"---
id: Sales
version: 1.0.0
services:
  - id: Orders
owners:
  - sales-team
---

# Sales
"#,
    );
    write(
        root,
        "domains/Sales/services/Orders/index.mdx",
        r#"---
id: Orders
version: 2.1.0
sends:
  - id: OrderPlaced
    version: ^1.0.0
receives:
  - id: PlaceOrder
    version: latest
owners:
  - dboyne
---
"#,
    );
    write(
        root,
        "domains/Sales/services/Orders/events/OrderPlaced/index.mdx",
        "---\nid: OrderPlaced\nversion: 1.2.0\n---\n",
    );
    write(
        root,
        "domains/Sales/services/Orders/events/OrderPlaced/versioned/0.9.0/index.mdx",
        "---\nid: OrderPlaced\nversion: 0.9.0\n---\n",
    );
    write(
        root,
        "commands/PlaceOrder/index.mdx",
        "---\nid: PlaceOrder\nversion: 0.0.1\n---\n",
    );
    write(root, "users/dboyne.mdx", "---\nid: dboyne\nname: David\n---\n");
    write(
        root,
        "teams/sales-team.mdx",
        "---\nid: sales-team\nmembers:\n  - dboyne\n---\n",
    );
    temp
}

fn catalog_lint() -> Command {
    let mut cmd = Command::new(cargo_bin("catalog-lint"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    catalog_lint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference checker"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    catalog_lint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_clean_catalog_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    catalog_lint()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No broken references found"));
    Ok(())
}

#[test]
fn cli_no_args_lints_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    catalog_lint()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No broken references found"));
    Ok(())
}

#[test]
fn cli_lint_subcommand_reports_missing_reference() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "domains/Sales/services/Billing/index.mdx",
        "---\nid: Billing\nreceives:\n  - id: InvoiceRequested\n---\n",
    );

    catalog_lint()
        .arg("lint")
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "error[refs/resource-exists]: Referenced event/command/query \"InvoiceRequested\" does not exist",
        ))
        .stdout(predicate::str::contains("service/Billing (receives)"))
        .stdout(predicate::str::contains("Found 1 error(s) and 0 warning(s)"));
    Ok(())
}

#[test]
fn cli_reports_unsatisfied_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "flows/Checkout/index.mdx",
        "---\nid: Checkout\nsteps:\n  - id: 1\n    message:\n      id: OrderPlaced\n      version: ^3.0.0\n---\n",
    );

    catalog_lint()
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("refs/valid-version-range"))
        .stdout(predicate::str::contains("(version: ^3.0.0)"));
    Ok(())
}

#[test]
fn cli_reports_broken_frontmatter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "channels/orders/index.mdx",
        "---\nid: orders\naddress: [unclosed\n---\n",
    );

    catalog_lint()
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("frontmatter/valid-yaml"));
    Ok(())
}

#[test]
fn cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "entities/Order/index.mdx",
        "---\nid: Order\nowners:\n  - nobody\n---\n",
    );

    let output = catalog_lint()
        .args(["--format", "json"])
        .arg(temp.path())
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 1);
    let diag = &parsed["diagnostics"][0];
    assert_eq!(diag["ruleId"], "refs/owner-exists");
    assert_eq!(diag["resourceKey"], "entity/Order");
    assert_eq!(diag["field"], "owners");
    assert_eq!(diag["sourceFile"], "entities/Order/index.mdx");
    Ok(())
}

#[test]
fn cli_json_output_for_clean_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    let output = catalog_lint()
        .args(["lint", "--format", "json"])
        .arg(temp.path())
        .output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 0);
    Ok(())
}

#[test]
fn cli_config_downgrades_to_warning() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "entities/Order/index.mdx",
        "---\nid: Order\nowners:\n  - nobody\n---\n",
    );
    write(
        temp.path(),
        ".catalog-lint.yml",
        "rules:\n  refs/owner-exists: warn\n",
    );

    catalog_lint()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[refs/owner-exists]"));

    catalog_lint()
        .arg(temp.path())
        .arg("--strict")
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_config_turns_rule_off() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "entities/Order/index.mdx",
        "---\nid: Order\nowners:\n  - nobody\n---\n",
    );
    let config = temp.path().join("lint.yml");
    fs::write(&config, "rules:\n  refs/owner-exists: off\n")?;

    catalog_lint()
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_config_ignores_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        "drafts/services/Sketch/index.mdx",
        "---\nid: Sketch\nsends:\n  - id: Nothing\n---\n",
    );
    write(
        temp.path(),
        ".catalog-lint.yml",
        "ignore:\n  - \"drafts/**\"\n",
    );

    catalog_lint().arg(temp.path()).assert().success();
    Ok(())
}

#[test]
fn cli_invalid_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    write(
        temp.path(),
        ".catalog-lint.yml",
        "rules:\n  refs/not-a-rule: warn\n",
    );

    catalog_lint()
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown rule(s): refs/not-a-rule"));
    Ok(())
}

#[test]
fn cli_missing_catalog_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    catalog_lint()
        .arg(temp.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Catalog not found"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    catalog_lint()
        .arg(temp.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_quiet_hides_success_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog();
    catalog_lint()
        .arg("--quiet")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_lists_rules() -> Result<(), Box<dyn std::error::Error>> {
    catalog_lint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("refs/resource-exists"))
        .stdout(predicate::str::contains("refs/valid-version-range"))
        .stdout(predicate::str::contains("refs/owner-exists"))
        .stdout(predicate::str::contains("frontmatter/valid-yaml"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    catalog_lint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-lint"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_format() -> Result<(), Box<dyn std::error::Error>> {
    catalog_lint()
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}
