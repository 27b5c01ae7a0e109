//! Reference extraction from frontmatter.
//!
//! Which fields hold references depends on the resource type:
//!
//! | Type | Field | Item | Resolves against |
//! |---|---|---|---|
//! | domain | `services` | `{id, version?}` | service |
//! | domain | `domains` | `{id, version?}` | domain |
//! | domain, service | `entities` | `{id, version?}` | entity |
//! | service | `sends`, `receives` | `{id, version?}` | event, command, query |
//! | flow | `steps[i].message` | `{id, version?}` | event, command, query |
//! | flow | `steps[i].service` | `{id, version?}` | service |
//! | entity | `properties[i].references` | id string | entity |
//! | team | `members` | id string | user |
//! | any | `owners` | id string | user, team |
//!
//! Missing or wrong-shaped fields and items are skipped.

use serde_yaml::Value;

use crate::catalog::{ParsedResource, ResourceType};

/// Types a message reference may resolve to.
pub const MESSAGE_TYPES: &[ResourceType] = &[
    ResourceType::Event,
    ResourceType::Command,
    ResourceType::Query,
];

const SERVICE_TYPES: &[ResourceType] = &[ResourceType::Service];

/// Types an owner may resolve to.
pub const OWNER_TYPES: &[ResourceType] = &[ResourceType::User, ResourceType::Team];

/// A pointer to another resource, optionally at a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub id: String,
    /// `None` means any version will do.
    pub version: Option<String>,
}

impl ResourceReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// A reference together with where it came from and what it may point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceInfo {
    pub reference: ResourceReference,
    /// Candidate types, in order. Any one resolving the id is enough.
    pub possible_types: &'static [ResourceType],
    /// Frontmatter path, e.g. `sends` or `steps[2].message`.
    pub field: String,
}

/// List every reference a resource declares, in frontmatter order.
pub fn extract_references(resource: &ParsedResource) -> Vec<ReferenceInfo> {
    let mut refs = Vec::new();
    let resource_type = resource.resource_type();

    for (key, value) in resource.frontmatter.iter() {
        match (resource_type, key) {
            (ResourceType::Domain, "services") => {
                push_references(&mut refs, value, &[ResourceType::Service], key)
            }
            (ResourceType::Domain, "domains") => {
                push_references(&mut refs, value, &[ResourceType::Domain], key)
            }
            (ResourceType::Domain | ResourceType::Service, "entities") => {
                push_references(&mut refs, value, &[ResourceType::Entity], key)
            }
            (ResourceType::Service, "sends" | "receives") => {
                push_references(&mut refs, value, MESSAGE_TYPES, key)
            }
            (ResourceType::Flow, "steps") => push_flow_steps(&mut refs, value),
            (ResourceType::Entity, "properties") => push_entity_properties(&mut refs, value),
            (ResourceType::Team, "members") => {
                push_bare_ids(&mut refs, value, &[ResourceType::User], key)
            }
            (_, "owners") => push_bare_ids(&mut refs, value, OWNER_TYPES, key),
            _ => {}
        }
    }

    refs
}

fn push_references(
    refs: &mut Vec<ReferenceInfo>,
    value: &Value,
    possible_types: &'static [ResourceType],
    field: &str,
) {
    let Some(items) = value.as_sequence() else {
        return;
    };
    refs.extend(
        items
            .iter()
            .filter_map(parse_reference)
            .map(|reference| ReferenceInfo {
                reference,
                possible_types,
                field: field.to_string(),
            }),
    );
}

fn push_bare_ids(
    refs: &mut Vec<ReferenceInfo>,
    value: &Value,
    possible_types: &'static [ResourceType],
    field: &str,
) {
    let Some(items) = value.as_sequence() else {
        return;
    };
    refs.extend(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(|id| ReferenceInfo {
                reference: ResourceReference::new(id),
                possible_types,
                field: field.to_string(),
            }),
    );
}

fn push_flow_steps(refs: &mut Vec<ReferenceInfo>, value: &Value) {
    let Some(steps) = value.as_sequence() else {
        return;
    };
    for (i, step) in steps.iter().enumerate() {
        let Some(step) = step.as_mapping() else {
            continue;
        };
        for (key, target) in step {
            let Some(name) = key.as_str() else {
                continue;
            };
            let possible_types = match name {
                "message" => MESSAGE_TYPES,
                "service" => SERVICE_TYPES,
                _ => continue,
            };
            if let Some(reference) = parse_reference(target) {
                refs.push(ReferenceInfo {
                    reference,
                    possible_types,
                    field: format!("steps[{}].{}", i, name),
                });
            }
        }
    }
}

fn push_entity_properties(refs: &mut Vec<ReferenceInfo>, value: &Value) {
    let Some(properties) = value.as_sequence() else {
        return;
    };
    for (i, property) in properties.iter().enumerate() {
        let Some(id) = property.get("references").and_then(Value::as_str) else {
            continue;
        };
        refs.push(ReferenceInfo {
            reference: ResourceReference::new(id),
            possible_types: &[ResourceType::Entity],
            field: format!("properties[{}].references", i),
        });
    }
}

/// `{id, version?}` with a string id. A non-string version is ignored.
fn parse_reference(value: &Value) -> Option<ResourceReference> {
    let id = value.get("id")?.as_str()?;
    let version = value.get("version").and_then(Value::as_str);
    Some(ResourceReference {
        id: id.to_string(),
        version: version.map(str::to_string),
    })
}
