//! Expansion of `<details>`/`<summary>` blocks.
//!
//! The target editor has no collapsible blocks, so every block is shown
//! inline. Block markers disappear, the summary label is discarded along
//! with any "show answer" lines left over inside the block, and the body
//! stays where it was.

use crate::utils::code_fence::{FencePosition, FenceTracker};
use crate::utils::line_classifier::{is_fence_delimiter, is_reveal_label};
use regex::Regex;
use std::sync::LazyLock;

// Markers count only at the start of a line; closing tags may also end one.
static DETAILS_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*<details(?:\s[^>]*)?>").unwrap());
static DETAILS_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*</details\s*>|</details\s*>\s*$").unwrap());
static SUMMARY_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*<summary(?:\s[^>]*)?>.*?</summary\s*>").unwrap());
static SUMMARY_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*<summary(?:\s[^>]*)?>").unwrap());
static SUMMARY_STRAY_CLOSE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*</summary\s*>").unwrap());
static SUMMARY_CLOSE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^.*?</summary\s*>").unwrap());

/// Index of the line closing a summary opened just before `from`.
///
/// Gives up at the end of the block or at a code fence.
fn find_summary_close(lines: &[String], from: usize) -> Option<usize> {
    for (offset, line) in lines[from..].iter().enumerate() {
        if is_fence_delimiter(line) || DETAILS_CLOSE_REGEX.is_match(line) {
            return None;
        }
        if SUMMARY_CLOSE_REGEX.is_match(line) {
            return Some(from + offset);
        }
    }
    None
}

fn cut(text: &str, re: &Regex) -> Option<String> {
    re.find(text).map(|m| format!("{}{}", &text[..m.start()], &text[m.end()..]))
}

/// Remove collapsible-block markers and summary labels, keeping block bodies inline.
///
/// A summary is recognized only inside a block. A multi-line summary runs up
/// to its `</summary>`; without one before the block ends only the opening
/// line is dropped. Blank lines are always kept. Text sharing a line with a
/// marker survives when it is not blank. Fenced code is passed through
/// untouched.
pub fn expand_collapsible_blocks(lines: &[String]) -> Vec<String> {
    let mut fence = FenceTracker::new();
    let mut inside_block = false;
    let mut summary_close: Option<usize> = None;
    let mut result = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let mut text = line.clone();
        let mut stripped = false;

        if let Some(close) = summary_close {
            if idx < close {
                if line.trim().is_empty() {
                    result.push(line.clone());
                }
                continue;
            }
            summary_close = None;
            text = SUMMARY_CLOSE_REGEX.replace(line, "").into_owned();
            stripped = true;
        } else if fence.observe(line) != FencePosition::Outside {
            result.push(line.clone());
            continue;
        }

        let was_inside_block = inside_block;

        if let Some(rest) = cut(&text, &DETAILS_OPEN_REGEX) {
            text = rest;
            inside_block = true;
            stripped = true;
        }

        if inside_block {
            if let Some(rest) = cut(&text, &SUMMARY_SPAN_REGEX) {
                text = rest;
                stripped = true;
            } else if SUMMARY_OPEN_REGEX.is_match(&text) {
                summary_close = find_summary_close(lines, idx + 1);
                if summary_close.is_none() {
                    log::debug!("[mdsimplify-passes] Unterminated summary, dropping only its opening line: {line}");
                }
                text.clear();
                stripped = true;
            } else if let Some(rest) = cut(&text, &SUMMARY_STRAY_CLOSE_REGEX) {
                text = rest;
                stripped = true;
            }
        }

        if let Some(rest) = cut(&text, &DETAILS_CLOSE_REGEX) {
            text = rest;
            inside_block = false;
            stripped = true;
        }

        if stripped {
            if text.trim().is_empty() {
                continue;
            }
            if (was_inside_block || inside_block) && is_reveal_label(&text) {
                continue;
            }
            result.push(text);
        } else if inside_block && is_reveal_label(line) {
            log::debug!("[mdsimplify-passes] Dropping reveal label inside collapsible block: {line}");
        } else {
            result.push(line.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(lines: &[&str]) -> Vec<String> {
        let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        expand_collapsible_blocks(&owned)
    }

    #[test]
    fn test_single_line_summary_discarded() {
        let result = expand(&[
            "<details>",
            "<summary>Показать ответ</summary>",
            "",
            "SELECT 1;",
            "</details>",
        ]);
        assert_eq!(result, vec!["", "SELECT 1;"]);
    }

    #[test]
    fn test_multi_line_summary_discarded() {
        let result = expand(&[
            "<details>",
            "<summary>",
            "**Show solution**",
            "",
            "</summary>",
            "Body text",
            "</details>",
        ]);
        assert_eq!(result, vec!["", "Body text"]);
    }

    #[test]
    fn test_trailing_content_after_open_kept() {
        let result = expand(&["<details>Answer: 42", "</details>"]);
        assert_eq!(result, vec!["Answer: 42"]);
    }

    #[test]
    fn test_attributes_and_case() {
        let result = expand(&["<DETAILS open>", "<Summary>Hint</Summary>", "text", "</Details>"]);
        assert_eq!(result, vec!["text"]);
    }

    #[test]
    fn test_reveal_label_inside_block_dropped() {
        let result = expand(&["<details>", "👁 *Показать решение*", "body", "</details>"]);
        assert_eq!(result, vec!["body"]);
    }

    #[test]
    fn test_reveal_label_outside_block_kept_by_pass() {
        let result = expand(&["Show answer", "text"]);
        assert_eq!(result, vec!["Show answer", "text"]);
    }

    #[test]
    fn test_fenced_markers_untouched() {
        let result = expand(&["```html", "<details>", "<summary>x</summary>", "```"]);
        assert_eq!(result, vec!["```html", "<details>", "<summary>x</summary>", "```"]);
    }

    #[test]
    fn test_unterminated_summary_keeps_body() {
        let result = expand(&["<details>", "<summary>Hint", "BODY ONE", "", "BODY TWO", "</details>"]);
        assert_eq!(result, vec!["BODY ONE", "", "BODY TWO"]);
    }

    #[test]
    fn test_summary_mentioned_in_prose_untouched() {
        let input = ["Use the `<summary>` tag for the label.", "", "IMPORTANT BODY", "", "## Next", "More TEXT"];
        assert_eq!(expand(&input), input.to_vec());
    }

    #[test]
    fn test_summary_outside_block_untouched() {
        let input = ["<summary>Loose", "body"];
        assert_eq!(expand(&input), input.to_vec());
    }

    #[test]
    fn test_summary_closed_on_later_line_with_body_after() {
        let result = expand(&["<details>", "<summary>Click", "to open</summary> Body", "</details>"]);
        assert_eq!(result, vec![" Body"]);
    }

    #[test]
    fn test_body_line_ending_with_close_marker() {
        let result = expand(&["<details>", "<summary>Hint</summary>", "Answer: 42</details>", "after"]);
        assert_eq!(result, vec!["Answer: 42", "after"]);
    }

    #[test]
    fn test_lines_without_blocks_unchanged() {
        let input = ["# Title", "", "- item", "plain"];
        assert_eq!(expand(&input), input.to_vec());
    }
}
