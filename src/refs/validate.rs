//! Reference validation across a whole catalog.

use tracing::debug;

use super::extract::{extract_references, ReferenceInfo};
use super::index::ResourceIndex;
use super::version::is_satisfied;
use crate::catalog::{ParsedResource, ResourceType};
use crate::lint::rule::{OWNER_EXISTS, RESOURCE_EXISTS, VALID_VERSION_RANGE};
use crate::lint::{RuleId, ValidationError};

/// Check every reference declared by `resources` against those same resources.
///
/// Returns one finding per unresolved reference, ordered by resource and then
/// by declaration. Cycles between resources are not an error.
pub fn validate_references(resources: &[ParsedResource]) -> Vec<ValidationError> {
    let index = ResourceIndex::build(resources);
    let mut errors = Vec::new();
    let mut checked = 0usize;

    for resource in resources {
        for info in extract_references(resource) {
            checked += 1;
            if !resolves(&index, &info) {
                errors.push(unresolved(resource, &info));
            }
        }
    }

    debug!(
        references = checked,
        unresolved = errors.len(),
        "validated references"
    );
    errors
}

/// A reference resolves if any candidate type has the id at a matching version.
fn resolves(index: &ResourceIndex, info: &ReferenceInfo) -> bool {
    let requested = info.reference.version.as_deref();
    info.possible_types.iter().any(|&resource_type| {
        index
            .versions(resource_type, &info.reference.id)
            .is_some_and(|available| is_satisfied(requested, available))
    })
}

fn unresolved(resource: &ParsedResource, info: &ReferenceInfo) -> ValidationError {
    let mut message = format!(
        "Referenced {} \"{}\"",
        type_label(info.possible_types),
        info.reference.id
    );
    if let Some(version) = &info.reference.version {
        message.push_str(&format!(" (version: {})", version));
    }
    message.push_str(" does not exist");

    ValidationError::reference(
        resource.resource_key(),
        info.field.clone(),
        message,
        resource.location.relative_path.clone(),
        rule_for(info),
    )
}

fn rule_for(info: &ReferenceInfo) -> RuleId {
    if info.field == "owners" {
        RuleId::new(OWNER_EXISTS)
    } else if info.reference.version.is_some() {
        RuleId::new(VALID_VERSION_RANGE)
    } else {
        RuleId::new(RESOURCE_EXISTS)
    }
}

fn type_label(types: &[ResourceType]) -> String {
    types
        .iter()
        .map(ResourceType::as_str)
        .collect::<Vec<_>>()
        .join("/")
}
