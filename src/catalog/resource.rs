//! Resource types and parsed catalog entries.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::frontmatter::Frontmatter;

/// The kind of resource a catalog document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Domain,
    Service,
    Event,
    Command,
    Query,
    Channel,
    Flow,
    Entity,
    User,
    Team,
}

impl ResourceType {
    /// Every resource type, in catalog order.
    pub const ALL: [ResourceType; 10] = [
        ResourceType::Domain,
        ResourceType::Service,
        ResourceType::Event,
        ResourceType::Command,
        ResourceType::Query,
        ResourceType::Channel,
        ResourceType::Flow,
        ResourceType::Entity,
        ResourceType::User,
        ResourceType::Team,
    ];

    /// Singular lowercase name, as used in resource keys and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Service => "service",
            Self::Event => "event",
            Self::Command => "command",
            Self::Query => "query",
            Self::Channel => "channel",
            Self::Flow => "flow",
            Self::Entity => "entity",
            Self::User => "user",
            Self::Team => "team",
        }
    }

    /// Name of the catalog directory that holds resources of this type.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Domain => "domains",
            Self::Service => "services",
            Self::Event => "events",
            Self::Command => "commands",
            Self::Query => "queries",
            Self::Channel => "channels",
            Self::Flow => "flows",
            Self::Entity => "entities",
            Self::User => "users",
            Self::Team => "teams",
        }
    }

    /// Look up a resource type by its collection directory name.
    pub fn from_collection(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.collection() == name)
    }

    /// Whether a frontmatter `id` overrides the storage-derived id.
    pub fn has_declared_id(&self) -> bool {
        matches!(self, Self::User | Self::Team | Self::Domain)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown resource type: {}", s))
    }
}

/// Where a resource was found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    /// Absolute (or caller-supplied) path to the document.
    pub path: PathBuf,
    /// Path relative to the catalog root, `/`-separated.
    pub relative_path: String,
    /// Resource type derived from the directory layout.
    pub resource_type: ResourceType,
    /// Resource id derived from the directory or file name.
    pub resource_id: String,
}

impl ResourceLocation {
    /// Create a location whose path is the relative path itself.
    pub fn new(
        resource_type: ResourceType,
        resource_id: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Self {
        let relative_path = relative_path.into();
        Self {
            path: PathBuf::from(&relative_path),
            relative_path,
            resource_type,
            resource_id: resource_id.into(),
        }
    }

    /// Set the on-disk path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// A catalog document with its parsed frontmatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResource {
    pub location: ResourceLocation,
    pub frontmatter: Frontmatter,
}

impl ParsedResource {
    pub fn new(location: ResourceLocation, frontmatter: Frontmatter) -> Self {
        Self {
            location,
            frontmatter,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.location.resource_type
    }

    /// The `version` field, if it is a string.
    pub fn version(&self) -> Option<&str> {
        self.frontmatter.get_str("version")
    }

    /// Id used for indexing and for satisfying references.
    ///
    /// Users, teams and domains may declare an `id` that differs from their
    /// file or directory name; every other type is keyed by location.
    pub fn canonical_id(&self) -> &str {
        if self.resource_type().has_declared_id() {
            if let Some(id) = self.frontmatter.get_str("id") {
                return id;
            }
        }
        &self.location.resource_id
    }

    /// `<type>/<storage id>` key used when reporting on this resource.
    pub fn resource_key(&self) -> String {
        format!("{}/{}", self.location.resource_type, self.location.resource_id)
    }
}
