//! Cross-resource reference resolution.
//!
//! Resources point at each other from their frontmatter: a domain lists its
//! services, a service the messages it sends, anything its owners. This
//! module checks that every such pointer lands on a resource that exists,
//! at a matching version when one is requested.
//!
//! - [`index`] - Version-aware lookup table of every resource
//! - [`extract`] - Typed references declared by one resource
//! - [`version`] - Exact, range and x-pattern version matching
//! - [`validate`] - The whole-catalog check
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::{Frontmatter, ParsedResource, ResourceLocation, ResourceType};
//! use catalog_lint::refs::validate_references;
//!
//! let domain = ParsedResource::new(
//!     ResourceLocation::new(ResourceType::Domain, "Sales", "domains/Sales/index.mdx"),
//!     Frontmatter::from_yaml("services:\n  - id: Orders\n").unwrap(),
//! );
//! let service = ParsedResource::new(
//!     ResourceLocation::new(ResourceType::Service, "Orders", "services/Orders/index.mdx"),
//!     Frontmatter::from_yaml("version: 1.0.0\n").unwrap(),
//! );
//!
//! assert!(validate_references(&[domain.clone(), service]).is_empty());
//! assert_eq!(validate_references(&[domain]).len(), 1);
//! ```

pub mod extract;
pub mod index;
pub mod validate;
pub mod version;

pub use extract::{extract_references, ReferenceInfo, ResourceReference};
pub use index::{ResourceIndex, VersionSet, LATEST};
pub use validate::validate_references;
pub use version::is_satisfied;
