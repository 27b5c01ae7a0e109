//! Linter configuration.
//!
//! Configuration lives in an optional `.catalog-lint.yml` in the catalog
//! root and adjusts rule levels and ignored paths:
//!
//! ```yaml
//! rules:
//!   refs/owner-exists: warn
//!   refs/valid-version-range: off
//! ignore:
//!   - "**/drafts/**"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{LintConfig, RuleLevel};
