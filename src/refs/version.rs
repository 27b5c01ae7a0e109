//! Version matching for versioned references.
//!
//! A requested version is checked against the raw version strings a resource
//! is known under. Exact string matches always win, so non-semver versions
//! resolve when spelled identically. Otherwise the request is read as an npm
//! style range (`1.2.3`, `^1.0.0`, `~1.2`, `>=1.0.0 <2.0.0`,
//! `1.0.0 - 1.4.0`, `1.x`, `^1 || ^2`) and tested against every entry that
//! is a valid semantic version.

use semver::{Version, VersionReq};
use tracing::trace;

use super::index::{VersionSet, LATEST};

/// Whether `requested` is satisfied by any of the `available` versions.
///
/// `None` and `"latest"` accept any known version.
pub fn is_satisfied(requested: Option<&str>, available: &VersionSet) -> bool {
    let Some(requested) = requested else {
        return !available.is_empty();
    };
    if requested == LATEST {
        return !available.is_empty();
    }
    if available.contains(requested) {
        return true;
    }

    let ranges = match parse_range(requested) {
        Ok(ranges) => ranges,
        Err(e) => {
            trace!(requested, error = %e, "not a version range, exact match only");
            // exact membership was checked above
            return false;
        }
    };

    let candidates: Vec<(&str, Version)> = semver_entries(available).collect();
    if candidates
        .iter()
        .any(|(_, v)| ranges.iter().any(|r| r.matches(v)))
    {
        return true;
    }

    if requested.contains(".x") {
        let prefix = requested.replace(".x", "");
        return candidates.iter().any(|(raw, _)| raw.starts_with(&prefix));
    }

    false
}

/// Entries of `available` that are valid semantic versions, with their parse.
fn semver_entries(available: &VersionSet) -> impl Iterator<Item = (&str, Version)> {
    available
        .iter()
        .filter(|v| *v != LATEST)
        .filter_map(|raw| Version::parse(strip_v(raw)).ok().map(|v| (raw, v)))
}

/// Parse an npm-style range into one requirement per `||` alternative.
pub(crate) fn parse_range(range: &str) -> Result<Vec<VersionReq>, semver::Error> {
    range
        .split("||")
        .map(|alternative| VersionReq::parse(&to_req_syntax(alternative)))
        .collect()
}

/// Rewrite one npm range alternative as a comma-separated requirement.
///
/// A bare version is exact (`1.2.3` → `=1.2.3`) and a bare partial version
/// spans its missing components (`1.2` → `=1.2`, i.e. `1.2.x`).
fn to_req_syntax(alternative: &str) -> String {
    let alternative = alternative.trim();
    if alternative.is_empty() {
        return "*".to_string();
    }

    if let Some((low, high)) = alternative.split_once(" - ") {
        return format!(
            ">={}, <={}",
            strip_v(low.trim()),
            strip_v(high.trim())
        );
    }

    let mut comparators = Vec::new();
    let mut pending_op = String::new();
    for token in alternative.split_whitespace() {
        let token = token.trim_end_matches(',');
        if token.is_empty() {
            continue;
        }
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }
        let comparator = format!("{}{}", std::mem::take(&mut pending_op), token);
        comparators.push(normalize_comparator(&comparator));
    }
    if !pending_op.is_empty() {
        comparators.push(pending_op);
    }

    comparators.join(", ")
}

fn normalize_comparator(comparator: &str) -> String {
    let split = comparator
        .find(|c: char| !is_operator_char(c))
        .unwrap_or(comparator.len());
    let (op, version) = comparator.split_at(split);
    let version = strip_v(version);

    let parts: Vec<&str> = version.split('.').collect();
    match parts.iter().position(|p| matches!(*p, "*" | "x" | "X")) {
        // `1.x` → `1.*`; `>=1.x` → `>=1`
        Some(0) => "*".to_string(),
        Some(n) if op.is_empty() => format!("{}.*", parts[..n].join(".")),
        Some(n) => format!("{}{}", op, parts[..n].join(".")),
        None if op.is_empty() => format!("={}", version),
        None => format!("{}{}", op, version),
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '~' | '^')
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}
