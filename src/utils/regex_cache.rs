//! Shared compiled patterns used by the classifier, the passes and the rules.
//!
//! Patterns that need look-around or back-references are compiled with
//! `fancy_regex`; everything else uses the linear-time `regex` crate.

use fancy_regex::{Captures as FancyCaptures, Regex as FancyRegex};
use regex::Regex;
use std::sync::LazyLock;

// List patterns
pub static LIST_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(?:-|\d+\.)\s+").unwrap());
pub static NUMBERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").unwrap());
pub static BULLET_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s+").unwrap());
pub static NUMBERED_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

// Heading patterns
pub static ATX_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

// Blockquote patterns
pub static BLOCKQUOTE_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*>\s+)+").unwrap());
pub static BLOCKQUOTE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>\s+").unwrap());

// Emphasis patterns
pub static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
pub static ITALIC_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<!\*)\*(?!\*)([^*\s](?:[^*]*[^*\s])?)\*(?!\*)").unwrap());

// Code span patterns
pub static CODE_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

// Link and image patterns
pub static INLINE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").unwrap());
pub static ANY_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(!?)\[([^\]]*)\]\(([^)]+)\)").unwrap());

// URL patterns
pub static BARE_URL_PROTOCOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://([^\s)]+)").unwrap());
pub static URL_PROTOCOL_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Replace every match of a look-around pattern, building each replacement
/// with `rep`.
///
/// `fancy_regex` can fail at match time when the backtracking limit is hit.
/// In that case the rest of the text is kept as-is, so callers stay total.
pub fn fancy_replace_all<F>(re: &FancyRegex, text: &str, mut rep: F) -> String
where
    F: FnMut(&FancyCaptures<'_>) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in re.captures_iter(text) {
        let Ok(caps) = caps else {
            log::debug!("[mdsimplify-regex] backtrack limit hit, leaving remainder unchanged");
            break;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        result.push_str(&text[last_end..whole.start()]);
        result.push_str(&rep(&caps));
        last_end = whole.end();
    }

    result.push_str(&text[last_end..]);
    result
}

/// Check if content contains any emphasis markers (quick check before regex)
pub fn has_emphasis_markers(content: &str) -> bool {
    content.contains('*')
}

/// Check if content contains any HTML tags (quick check before regex)
pub fn has_html_tags(content: &str) -> bool {
    content.contains('<') && content.contains("</")
}

/// Check if content contains any links (quick check before regex)
pub fn has_link_markers(content: &str) -> bool {
    content.contains('[') && content.contains("](")
}

/// Check if content contains any URL protocol (quick check before regex)
pub fn has_url_protocol(content: &str) -> bool {
    content.contains("http://") || content.contains("https://")
}
