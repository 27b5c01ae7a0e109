//! Frontmatter extraction from catalog documents.
//!
//! A document carries frontmatter when its first line is `---`; the YAML
//! block runs to the next line consisting of `---`. The body after the
//! closing fence is not read.

use std::sync::LazyLock;

use regex::Regex;

use super::frontmatter::{Frontmatter, FrontmatterError};

/// Opening fence, then the YAML block up to the closing fence line.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?sm)\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?$")
        .expect("FENCED_BLOCK must compile")
});

/// Opening fence alone, used to tell "no frontmatter" from "unterminated".
static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---[ \t]*\r?(\n|\z)").expect("OPENING_FENCE must compile"));

/// Extract and parse the frontmatter of a document.
///
/// Documents without an opening fence have empty frontmatter.
pub fn parse_frontmatter(text: &str) -> Result<Frontmatter, FrontmatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if let Some(caps) = FENCED_BLOCK.captures(text) {
        let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        return Frontmatter::from_yaml(block);
    }

    if OPENING_FENCE.is_match(text) {
        return Err(FrontmatterError::Unterminated);
    }

    Ok(Frontmatter::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_block() {
        let doc = "---\nid: OrderPlaced\nversion: 0.0.1\n---\n\n# Order placed\n";
        let fm = parse_frontmatter(doc).unwrap();
        assert_eq!(fm.get_str("id"), Some("OrderPlaced"));
        assert_eq!(fm.get_str("version"), Some("0.0.1"));
    }

    #[test]
    fn ignores_body_fences() {
        let doc = "---\nname: A\n---\nbody\n---\nname: B\n---\n";
        let fm = parse_frontmatter(doc).unwrap();
        assert_eq!(fm.get_str("name"), Some("A"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let doc = "---\r\nname: Windows\r\n---\r\nbody\r\n";
        let fm = parse_frontmatter(doc).unwrap();
        assert_eq!(fm.get_str("name"), Some("Windows"));
    }

    #[test]
    fn empty_block_is_empty_frontmatter() {
        let fm = parse_frontmatter("---\n---\nbody\n").unwrap();
        assert!(fm.is_empty());
    }

    #[test]
    fn document_without_fence_has_empty_frontmatter() {
        let fm = parse_frontmatter("# Just a heading\n\nSome text.\n").unwrap();
        assert!(fm.is_empty());
    }

    #[test]
    fn strips_byte_order_mark() {
        let fm = parse_frontmatter("\u{feff}---\nname: Bom\n---\n").unwrap();
        assert_eq!(fm.get_str("name"), Some("Bom"));
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let err = parse_frontmatter("---\nname: Open\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = parse_frontmatter("---\nname: [oops\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)));
    }

    #[test]
    fn closing_fence_at_end_of_file() {
        let fm = parse_frontmatter("---\nname: Last\n---").unwrap();
        assert_eq!(fm.get_str("name"), Some("Last"));
    }
}
