//! catalog-lint - Reference checker for event-driven architecture catalogs.
//!
//! A catalog is a directory of markdown documents, one per domain, service,
//! message, channel, flow, entity, user or team, each carrying YAML
//! frontmatter. Documents reference one another by id and optional version.
//! catalog-lint finds every reference that does not resolve.
//!
//! # Modules
//!
//! - [`catalog`] - Discovering documents and parsing their frontmatter
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.catalog-lint.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Findings, rules, and output formatters
//! - [`refs`] - Reference extraction, indexing, and resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::{ParsedResource, ResourceLocation, ResourceType, parse_frontmatter};
//! use catalog_lint::refs::validate_references;
//!
//! let domain = ParsedResource::new(
//!     ResourceLocation::new(ResourceType::Domain, "Sales", "domains/Sales/index.mdx"),
//!     parse_frontmatter("---\nid: Sales\nservices:\n  - id: Orders\n---\n").unwrap(),
//! );
//!
//! let errors = validate_references(&[domain]);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field, "services");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod refs;
pub mod ui;

pub use error::{LintError, Result};
