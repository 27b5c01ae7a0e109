//! Catalog discovery.
//!
//! Walks a catalog directory and classifies each document by the layout
//! conventions below. Paths are relative to the catalog root.
//!
//! | Layout | Type | Id |
//! |---|---|---|
//! | `<collection>/<id>/index.mdx` | from collection | `<id>` |
//! | `<collection>/<id>/versioned/<v>/index.mdx` | from collection | `<id>` |
//! | `users/<id>.mdx`, `teams/<id>.mdx` | user / team | file stem |
//!
//! Collections may nest (`domains/Sales/services/Orders/index.mdx` is the
//! service `Orders`); the nearest collection directory wins. `.md` is
//! accepted wherever `.mdx` is.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use super::resource::{ResourceLocation, ResourceType};
use crate::error::{LintError, Result};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Find every resource document under `root`.
///
/// Files whose relative path matches one of the `ignore` globs are skipped.
/// Results are ordered by path so repeated scans produce the same sequence.
pub fn scan_catalog(root: &Path, ignore: &[String]) -> Result<Vec<ResourceLocation>> {
    if !root.is_dir() {
        return Err(LintError::CatalogNotFound {
            path: root.to_path_buf(),
        });
    }

    let ignore = compile_globset(ignore)?;
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_path = rel_path_slash(rel);

        if ignore.is_match(&relative_path) {
            trace!(path = %relative_path, "ignored by pattern");
            continue;
        }

        match classify(&relative_path) {
            Some((resource_type, resource_id)) => {
                trace!(path = %relative_path, %resource_type, id = %resource_id, "found resource");
                found.push(
                    ResourceLocation::new(resource_type, resource_id, relative_path)
                        .with_path(entry.path()),
                );
            }
            None => trace!(path = %relative_path, "not a resource document"),
        }
    }

    debug!(root = %root.display(), count = found.len(), "scanned catalog");
    Ok(found)
}

/// Derive the resource type and storage id from a relative path.
pub fn classify(relative_path: &str) -> Option<(ResourceType, String)> {
    let segments: Vec<&str> = relative_path.split('/').collect();
    let (file, dirs) = segments.split_last()?;
    let (stem, ext) = file.rsplit_once('.')?;
    if ext != "md" && ext != "mdx" {
        return None;
    }

    if stem == "index" {
        let n = dirs.len();
        let (collection, id) = if n >= 4 && dirs[n - 2] == "versioned" {
            (dirs[n - 4], dirs[n - 3])
        } else if n >= 2 {
            (dirs[n - 2], dirs[n - 1])
        } else {
            return None;
        };
        let resource_type = ResourceType::from_collection(collection)?;
        return Some((resource_type, id.to_string()));
    }

    match dirs.last().and_then(|d| ResourceType::from_collection(d)) {
        Some(t @ (ResourceType::User | ResourceType::Team)) => Some((t, stem.to_string())),
        _ => None,
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn compile_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| LintError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| LintError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

fn rel_path_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
