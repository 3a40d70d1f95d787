//! Nested-list marker unification.
//!
//! The target editor cannot mix marker types within one list, so nested
//! items take the marker type of their top-level parent: bullets under a
//! bullet, renumbered ordinals under a numbered item.

use crate::utils::code_fence::{FencePosition, FenceTracker};
use crate::utils::line_classifier::{ListItem, ListMarkerType, indent_width, parse_list_item};

/// The list item that nested items are currently unified against
#[derive(Debug, Clone, Copy)]
struct ListContext {
    marker: ListMarkerType,
    indent: usize,
    next_ordinal: usize,
}

impl ListContext {
    fn from_item(item: &ListItem<'_>) -> Self {
        Self {
            marker: item.marker,
            indent: item.indent,
            next_ordinal: 1,
        }
    }

    /// Re-emit a nested item with the parent's marker type, keeping its indentation
    fn rewrite(&mut self, line: &str, item: &ListItem<'_>) -> String {
        let leading = &line[..item.indent];
        match self.marker {
            ListMarkerType::Bulleted => format!("{leading}- {}", item.text),
            ListMarkerType::Numbered => {
                let ordinal = self.next_ordinal;
                self.next_ordinal += 1;
                format!("{leading}{ordinal}. {}", item.text)
            }
        }
    }
}

/// Rewrite nested list markers to match their parent's marker type.
///
/// A list item at indentation 0, or at or above the current parent's
/// indentation, becomes the new parent. A non-list line at or above the
/// parent's indentation clears the context; deeper non-list lines are
/// treated as continuations. Indented items seen with no parent are left
/// as they are. Fenced code is passed through, and fence delimiters count
/// as non-list lines.
pub fn unify_nested_lists(lines: &[String]) -> Vec<String> {
    let mut fence = FenceTracker::new();
    let mut parent: Option<ListContext> = None;
    let mut result = Vec::with_capacity(lines.len());

    for line in lines {
        let item = match fence.observe(line) {
            FencePosition::Inside => {
                result.push(line.clone());
                continue;
            }
            FencePosition::Delimiter => None,
            FencePosition::Outside => parse_list_item(line),
        };

        let Some(item) = item else {
            if parent.is_some_and(|ctx| indent_width(line) <= ctx.indent) {
                parent = None;
            }
            result.push(line.clone());
            continue;
        };

        if let Some(ctx) = parent.as_mut().filter(|ctx| item.indent > ctx.indent) {
            result.push(ctx.rewrite(line, &item));
            continue;
        }

        if item.indent == 0 || parent.is_some() {
            parent = Some(ListContext::from_item(&item));
        }
        result.push(line.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unify(lines: &[&str]) -> Vec<String> {
        let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        unify_nested_lists(&owned)
    }

    #[test]
    fn test_bullets_under_numbered_parent_are_numbered() {
        let result = unify(&["1. Step", "   - first", "   - second"]);
        assert_eq!(result, vec!["1. Step", "   1. first", "   2. second"]);
    }

    #[test]
    fn test_numbered_under_bullet_parent_become_bullets() {
        let result = unify(&["- Topic", "  1. alpha", "  2. beta"]);
        assert_eq!(result, vec!["- Topic", "  - alpha", "  - beta"]);
    }

    #[test]
    fn test_counter_resets_per_parent() {
        let result = unify(&["1. A", "   - a1", "   - a2", "2. B", "   - b1"]);
        assert_eq!(result, vec!["1. A", "   1. a1", "   2. a2", "2. B", "   1. b1"]);
    }

    #[test]
    fn test_continuation_keeps_context() {
        let result = unify(&["1. A", "   continued text", "   - nested"]);
        assert_eq!(result, vec!["1. A", "   continued text", "   1. nested"]);
    }

    #[test]
    fn test_paragraph_clears_context() {
        let result = unify(&["1. A", "", "Paragraph", "   - orphan"]);
        assert_eq!(result, vec!["1. A", "", "Paragraph", "   - orphan"]);
    }

    #[test]
    fn test_orphan_nested_item_untouched() {
        assert_eq!(unify(&["  - orphan", "  1. other"]), vec!["  - orphan", "  1. other"]);
    }

    #[test]
    fn test_fenced_lines_untouched() {
        let result = unify(&["1. A", "   ```", "   - inside code", "   ```", "   - after"]);
        assert_eq!(result, vec!["1. A", "   ```", "   - inside code", "   ```", "   1. after"]);
    }

    #[test]
    fn test_matching_types_normalized_only_by_ordinal() {
        let result = unify(&["1. A", "   5. x", "   9. y"]);
        assert_eq!(result, vec!["1. A", "   1. x", "   2. y"]);
    }
}
