//!
//! Stateless predicates that recognize the kinds of lines the passes and rules care about:
//! fence delimiters, list items, blockquotes, headings, image paths, table rows and reveal labels.

use crate::utils::regex_cache::{
    ATX_HEADING_REGEX, BLOCKQUOTE_LINE_REGEX, BOLD_REGEX, BULLET_MARKER_REGEX, ITALIC_REGEX, LIST_ITEM_REGEX,
    NUMBERED_ITEM_REGEX, NUMBERED_MARKER_REGEX, fancy_replace_all,
};
use regex::Regex;
use std::sync::LazyLock;

/// File extensions treated as images by link conversion and path adjustment
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".bmp"];

const FENCE_MARKERS: &[&str] = &["```", "~~~"];

/// Eye emoji, variation selector and whitespace may precede the phrase.
static REVEAL_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\x{1F441}\x{FE0F}\s]*(?:показать|show|reveal)\s+(?:ответ|решение|результат|answer|solution|result)",
    )
    .unwrap()
});

/// Emoji ranges that truncate list items in the target editor, with an optional variation selector.
pub const EMOJI_CLASS: &str = r"[\x{1F300}-\x{1F9FF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}\x{2600}-\x{27BF}\x{1F1E0}-\x{1F1FF}\x{1FA70}-\x{1FAFF}]\x{FE0F}?";

static LIST_EMOJI_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*(?:-|\d+\.)\s+{EMOJI_CLASS}")).unwrap());

/// Type of a list marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarkerType {
    /// `- item`
    Bulleted,
    /// `1. item`
    Numbered,
}

/// A list item split into its indentation, marker type and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub indent: usize,
    pub marker: ListMarkerType,
    pub text: &'a str,
}

/// Number of leading whitespace bytes
#[inline]
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Check if a line opens or closes a fenced code region
#[inline]
pub fn is_fence_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    FENCE_MARKERS.iter().any(|marker| trimmed.starts_with(marker))
}

/// Check if a line is a bulleted or numbered list item
#[inline]
pub fn is_list_item(line: &str) -> bool {
    LIST_ITEM_REGEX.is_match(line)
}

/// Check if a line is a numbered list item
#[inline]
pub fn is_numbered_item(line: &str) -> bool {
    NUMBERED_ITEM_REGEX.is_match(line)
}

/// Parse a list item, returning `None` for any other line
pub fn parse_list_item(line: &str) -> Option<ListItem<'_>> {
    let stripped = line.trim_start();
    let indent = line.len() - stripped.len();

    if let Some(m) = NUMBERED_MARKER_REGEX.find(stripped) {
        return Some(ListItem {
            indent,
            marker: ListMarkerType::Numbered,
            text: &stripped[m.end()..],
        });
    }

    BULLET_MARKER_REGEX.find(stripped).map(|m| ListItem {
        indent,
        marker: ListMarkerType::Bulleted,
        text: &stripped[m.end()..],
    })
}

/// Check if a line is a blockquote (`> text`)
#[inline]
pub fn is_blockquote(line: &str) -> bool {
    BLOCKQUOTE_LINE_REGEX.is_match(line)
}

/// Check if a line is an ATX heading of any level with text
#[inline]
pub fn is_heading(line: &str) -> bool {
    ATX_HEADING_REGEX.is_match(line)
}

/// Check if a line is a second-level heading (`## `, but not `### ` or deeper)
pub fn is_section_heading(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("## ") && !trimmed.starts_with("### ")
}

/// Check if a line looks like a table row
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with('|') || line.matches('|').count() > 2
}

/// Check if a path points to an image, judged by its extension
pub fn is_image_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Check if a list item's text starts with an emoji
pub fn is_list_item_with_leading_emoji(line: &str) -> bool {
    LIST_EMOJI_START_REGEX.is_match(line)
}

/// Check if a line is a leftover "show answer" label from a collapsible block.
///
/// Blank lines are never labels.
pub fn is_reveal_label(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }

    let unbolded = BOLD_REGEX.replace_all(stripped, "${1}");
    let plain = fancy_replace_all(&ITALIC_REGEX, &unbolded, |caps| {
        caps.get(1).map_or(String::new(), |m| m.as_str().to_string())
    });

    REVEAL_LABEL_REGEX.is_match(&plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_delimiters() {
        assert!(is_fence_delimiter("```"));
        assert!(is_fence_delimiter("```sql"));
        assert!(is_fence_delimiter("   ~~~"));
        assert!(!is_fence_delimiter("``inline``"));
        assert!(!is_fence_delimiter("text ```"));
    }

    #[test]
    fn test_parse_list_item() {
        let item = parse_list_item("   - nested text").unwrap();
        assert_eq!(item.indent, 3);
        assert_eq!(item.marker, ListMarkerType::Bulleted);
        assert_eq!(item.text, "nested text");

        let item = parse_list_item("12. twelfth").unwrap();
        assert_eq!(item.indent, 0);
        assert_eq!(item.marker, ListMarkerType::Numbered);
        assert_eq!(item.text, "twelfth");

        assert!(parse_list_item("plain paragraph").is_none());
        assert!(parse_list_item("---").is_none());
        assert!(parse_list_item("* star bullet").is_none());
    }

    #[test]
    fn test_list_item_predicates() {
        assert!(is_list_item("- a"));
        assert!(is_list_item("  3. c"));
        assert!(is_numbered_item("1. a"));
        assert!(!is_numbered_item("- a"));
        assert!(!is_list_item("1.5 is a number"));
    }

    #[test]
    fn test_section_heading() {
        assert!(is_section_heading("## Section"));
        assert!(is_section_heading("  ## Indented"));
        assert!(!is_section_heading("### Deeper"));
        assert!(!is_section_heading("# Title"));
        assert!(!is_section_heading("##NoSpace"));
    }

    #[test]
    fn test_heading_and_blockquote() {
        assert!(is_heading("###### Six"));
        assert!(!is_heading("####### Seven"));
        assert!(!is_heading("#hashtag"));
        assert!(is_blockquote("> quoted"));
        assert!(!is_blockquote("a -> b"));
    }

    #[test]
    fn test_table_row() {
        assert!(is_table_row("| a | b |"));
        assert!(is_table_row("a | b | c | d"));
        assert!(!is_table_row("a | b"));
    }

    #[test]
    fn test_image_path() {
        assert!(is_image_path("./diagram.SVG"));
        assert!(is_image_path("img/photo.jpeg"));
        assert!(!is_image_path("notes.md"));
    }

    #[test]
    fn test_leading_emoji() {
        assert!(is_list_item_with_leading_emoji("- 🔥 hot"));
        assert!(is_list_item_with_leading_emoji("2. ☀️ sunny"));
        assert!(!is_list_item_with_leading_emoji("- text 🔥"));
    }

    #[test]
    fn test_reveal_label() {
        assert!(is_reveal_label("**👁️ Показать ответ**"));
        assert!(is_reveal_label("Показать решение"));
        assert!(is_reveal_label("**Show answer**"));
        assert!(is_reveal_label("*reveal Solution*"));
        assert!(!is_reveal_label(""));
        assert!(!is_reveal_label("   "));
        assert!(!is_reveal_label("The answer is 42"));
    }
}
