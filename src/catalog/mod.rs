//! Catalog model and discovery.
//!
//! - [`resource`] - Resource types, locations and parsed documents
//! - [`frontmatter`] - Loosely-typed access to document metadata
//! - [`scanner`] - Directory walking and layout classification
//! - [`parser`] - Frontmatter block extraction
//! - [`loader`] - Scan + parse a whole catalog

pub mod frontmatter;
pub mod loader;
pub mod parser;
pub mod resource;
pub mod scanner;

pub use frontmatter::{Frontmatter, FrontmatterError};
pub use loader::{load_catalog, LoadedCatalog};
pub use parser::parse_frontmatter;
pub use resource::{ParsedResource, ResourceLocation, ResourceType};
pub use scanner::{classify, scan_catalog};
