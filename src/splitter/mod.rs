//! Splitting documents into one file per second-level section.
//!
//! A section starts at a `## ` heading (or at the top of the document) and
//! runs until the next one. Headings inside fenced code never start a
//! section. Sections made only of blank lines are dropped.

mod path_adjust;

pub use path_adjust::PathAdjustment;

use crate::utils::code_fence::{FencePosition, FenceTracker};
use crate::utils::line_classifier::is_section_heading;
use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static LEADING_DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+").unwrap());

fn has_content(section: &[String]) -> bool {
    section.iter().any(|line| !line.trim().is_empty())
}

/// Cut a document into sections at second-level headings outside fenced code
pub fn split_sections(lines: &[String]) -> Vec<Vec<String>> {
    let mut fence = FenceTracker::new();
    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let starts_section = fence.observe(line) == FencePosition::Outside && is_section_heading(line);

        if starts_section {
            let finished = std::mem::take(&mut current);
            if has_content(&finished) {
                sections.push(finished);
            }
        }
        current.push(line.clone());
    }

    if has_content(&current) {
        sections.push(current);
    }

    sections
}

/// Prefix shared by every section file produced from `file_name`.
///
/// The leading digits of the file stem, or its first two characters when it
/// does not start with a digit.
pub fn file_prefix(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    match LEADING_DIGITS_REGEX.find(stem) {
        Some(m) => m.as_str().to_string(),
        None => stem.chars().take(2).collect(),
    }
}

/// One section of a split document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub lines: Vec<String>,
    /// Image references rewritten for the target directory
    pub images_adjusted: usize,
}

/// `{prefix}_{NN}.md` with a 1-based, zero-padded index
pub fn section_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index:02}.md")
}

/// Split one document into named sections with image paths adjusted.
///
/// Keys are output file names in section order.
pub fn split_document(file_name: &str, lines: &[String], adjustment: PathAdjustment) -> IndexMap<String, Section> {
    let prefix = file_prefix(file_name);
    let sections = split_sections(lines);

    if sections.len() > 99 {
        log::warn!(
            "[mdsimplify-split] {file_name} has {} sections; file names past {} will not sort correctly",
            sections.len(),
            section_file_name(&prefix, 99)
        );
    }

    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let (lines, images_adjusted) = adjustment.adjust_lines(section);
            (section_file_name(&prefix, i + 1), Section { lines, images_adjusted })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_split_on_second_level_headings() {
        let doc = lines("# Title\n\nIntro\n\n## A\nbody A\n\n## B\nbody B\n");
        let sections = split_sections(&doc);
        assert_eq!(
            sections,
            vec![
                vec!["# Title", "", "Intro", ""],
                vec!["## A", "body A", ""],
                vec!["## B", "body B"],
            ]
        );
    }

    #[test]
    fn test_document_without_headings_is_one_section() {
        let doc = lines("Just a paragraph\nwith two lines");
        assert_eq!(split_sections(&doc), vec![doc.clone()]);
    }

    #[test]
    fn test_blank_sections_dropped() {
        let doc = lines("\n\n## A\ntext\n");
        let sections = split_sections(&doc);
        assert_eq!(sections, vec![vec!["## A", "text"]]);
    }

    #[test]
    fn test_heading_inside_fence_does_not_split() {
        let doc = lines("## A\n```\n## not a heading\n```\n## B");
        let sections = split_sections(&doc);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], vec!["## A", "```", "## not a heading", "```"]);
    }

    #[test]
    fn test_third_level_heading_does_not_split() {
        let doc = lines("## A\n### Sub\ntext");
        assert_eq!(split_sections(&doc).len(), 1);
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        assert!(split_sections(&[]).is_empty());
    }

    #[test]
    fn test_file_prefix() {
        assert_eq!(file_prefix("01_course.md"), "01");
        assert_eq!(file_prefix("14_final_defense.md"), "14");
        assert_eq!(file_prefix("intro.md"), "in");
        assert_eq!(file_prefix("я.md"), "я");
    }

    #[test]
    fn test_split_document_names_and_paths() {
        let doc = lines("## A\n![d](./a.svg)\n## B\n[n](notes.md)");
        let files = split_document("03_topic.md", &doc, PathAdjustment::new(1));
        let names: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["03_01.md", "03_02.md"]);
        assert_eq!(files["03_01.md"].lines, vec!["## A", "![d](../a.svg)"]);
        assert_eq!(files["03_01.md"].images_adjusted, 1);
        assert_eq!(files["03_02.md"].lines, vec!["## B", "[n](notes.md)"]);
        assert_eq!(files["03_02.md"].images_adjusted, 0);
    }
}
