// ABOUTME: Front matter extraction for slide documents
// ABOUTME: Splits an optional YAML block delimited by `---` lines from the body

use crate::errors::{DeckError, Result};
use crate::utils::line_content;
use serde::Deserialize;
use serde_yaml::Value;

/// Line that opens and closes the metadata block
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Result of splitting a document into its metadata and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: Option<String>,
    pub body: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    title: Option<Value>,
}

/// Extract the optional title and the remaining body from a document.
///
/// The document is trimmed first. When its first line is exactly `---`, the
/// text up to the next line that is exactly `---` is parsed as YAML and the
/// `title` key, if any, becomes the title. Everything after the closing line
/// is the body. Without an opening line the whole text is body.
pub fn extract(text: &str) -> Result<FrontMatter<'_>> {
    let text = text.trim();

    let first_line = text.split_inclusive('\n').next().unwrap_or_default();
    if line_content(first_line) != FRONT_MATTER_DELIMITER {
        return Ok(FrontMatter {
            title: None,
            body: text,
        });
    }

    let rest = &text[first_line.len()..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line_content(line) == FRONT_MATTER_DELIMITER {
            let title = parse_title(&rest[..offset])?;
            return Ok(FrontMatter {
                title,
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    Err(DeckError::MalformedFrontMatter(format!(
        "opening `{0}` has no matching closing `{0}`",
        FRONT_MATTER_DELIMITER
    )))
}

fn parse_title(block: &str) -> Result<Option<String>> {
    if block.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_yaml::from_str(block)?;
    if !value.is_mapping() {
        return Ok(None);
    }
    let metadata: Metadata = serde_yaml::from_value(value)?;
    Ok(metadata.title.and_then(scalar_to_string))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body() {
        let fm = extract("---\ntitle: Demo\n---\nHello").expect("Failed to extract");
        assert_eq!(fm.title.as_deref(), Some("Demo"));
        assert_eq!(fm.body, "Hello");
    }

    #[test]
    fn test_no_front_matter() {
        let fm = extract("\n\n# Slide\ntext\n").expect("Failed to extract");
        assert_eq!(fm.title, None);
        assert_eq!(fm.body, "# Slide\ntext");
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let err = extract("---\ntitle: X\nHello").unwrap_err();
        assert!(matches!(err, DeckError::MalformedFrontMatter(_)));
    }

    #[test]
    fn test_only_opening_delimiter() {
        let err = extract("---").unwrap_err();
        assert!(matches!(err, DeckError::MalformedFrontMatter(_)));
    }

    #[test]
    fn test_front_matter_without_title() {
        let fm = extract("---\nauthor: Someone\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title, None);
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_empty_front_matter() {
        let fm = extract("---\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title, None);
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_non_mapping_front_matter_has_no_title() {
        let fm = extract("---\n- a\n- b\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title, None);
    }

    #[test]
    fn test_scalar_titles_are_rendered() {
        let fm = extract("---\ntitle: 2024\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title.as_deref(), Some("2024"));

        let fm = extract("---\ntitle: \"Quoted: yes\"\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title.as_deref(), Some("Quoted: yes"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = extract("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, DeckError::FrontMatterYaml(_)));
    }

    #[test]
    fn test_delimiter_must_be_exact() {
        // Not an opening line, so the whole text is body
        let fm = extract("--- \ntitle: X\n---\nBody").expect("Failed to extract");
        assert_eq!(fm.title, None);
        assert!(fm.body.starts_with("--- "));

        // A slide delimiter is not a front matter delimiter
        let fm = extract("------\nBody").expect("Failed to extract");
        assert_eq!(fm.title, None);
        assert_eq!(fm.body, "------\nBody");
    }

    #[test]
    fn test_crlf_line_endings() {
        let fm = extract("---\r\ntitle: Demo\r\n---\r\nHello").expect("Failed to extract");
        assert_eq!(fm.title.as_deref(), Some("Demo"));
        assert_eq!(fm.body, "Hello");
    }

    #[test]
    fn test_closing_delimiter_at_end() {
        let fm = extract("---\ntitle: Demo\n---").expect("Failed to extract");
        assert_eq!(fm.title.as_deref(), Some("Demo"));
        assert_eq!(fm.body, "");
    }
}
