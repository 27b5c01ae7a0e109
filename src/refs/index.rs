//! Version-aware index of every resource in a catalog.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::catalog::{ParsedResource, ResourceType};

/// Version recorded for a resource that declares none.
///
/// Also accepted as a requested version meaning "any". A resource whose
/// frontmatter literally says `version: latest` is indistinguishable from
/// an unversioned one.
pub const LATEST: &str = "latest";

/// The raw version strings under which one (type, id) has been observed.
///
/// Versions are kept as written; nothing is parsed until a versioned
/// reference needs matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet(BTreeSet<String>);

impl VersionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a version. Returns `false` if it was already present.
    pub fn insert(&mut self, version: impl Into<String>) -> bool {
        self.0.insert(version.into())
    }

    pub fn contains(&self, version: &str) -> bool {
        self.0.contains(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for VersionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Resource type → canonical id → known versions.
#[derive(Debug, Default)]
pub struct ResourceIndex {
    entries: HashMap<ResourceType, HashMap<String, VersionSet>>,
}

impl ResourceIndex {
    /// Index every resource under its canonical id.
    ///
    /// Each resource contributes its string `version`, or [`LATEST`] when it
    /// has none. Never fails.
    pub fn build(resources: &[ParsedResource]) -> Self {
        let mut index = Self::default();
        for resource in resources {
            let version = resource.version().unwrap_or(LATEST);
            index
                .entries
                .entry(resource.resource_type())
                .or_default()
                .entry(resource.canonical_id().to_string())
                .or_default()
                .insert(version);
        }
        debug!(
            resources = resources.len(),
            entries = index.len(),
            "built resource index"
        );
        index
    }

    /// Known versions of a resource, or `None` if it does not exist.
    pub fn versions(&self, resource_type: ResourceType, id: &str) -> Option<&VersionSet> {
        self.entries.get(&resource_type)?.get(id)
    }

    pub fn contains(&self, resource_type: ResourceType, id: &str) -> bool {
        self.versions(resource_type, id).is_some()
    }

    /// Number of distinct (type, id) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
