//! Reading a catalog from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use super::parser::parse_frontmatter;
use super::resource::ParsedResource;
use super::scanner::scan_catalog;
use super::Frontmatter;
use crate::error::Result;
use crate::lint::ValidationError;

/// Every resource found in a catalog, plus documents that failed to parse.
#[derive(Debug, Default)]
pub struct LoadedCatalog {
    pub resources: Vec<ParsedResource>,
    pub errors: Vec<ValidationError>,
}

/// Scan `root` and parse the frontmatter of every resource document.
///
/// A document with broken frontmatter is reported and kept with empty
/// frontmatter, so the resource still exists for reference resolution.
pub fn load_catalog(root: &Path, ignore: &[String]) -> Result<LoadedCatalog> {
    let mut catalog = LoadedCatalog::default();

    for location in scan_catalog(root, ignore)? {
        let text = fs::read_to_string(&location.path)
            .with_context(|| format!("read {}", location.path.display()))?;

        let frontmatter = match parse_frontmatter(&text) {
            Ok(fm) => fm,
            Err(e) => {
                warn!(path = %location.relative_path, error = %e, "unparseable frontmatter");
                catalog.errors.push(ValidationError::parse(
                    format!("{}/{}", location.resource_type, location.resource_id),
                    location.relative_path.clone(),
                    format!("Could not parse frontmatter: {}", e),
                ));
                Frontmatter::default()
            }
        };

        catalog
            .resources
            .push(ParsedResource::new(location, frontmatter));
    }

    debug!(
        resources = catalog.resources.len(),
        parse_errors = catalog.errors.len(),
        "loaded catalog"
    );
    Ok(catalog)
}
