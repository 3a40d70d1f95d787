//! Relative image-path repair for split output.
//!
//! Sections written to a directory nested below the source directory need
//! their relative image references to climb back up. Links to anything
//! other than an image are never touched.

use crate::utils::code_fence::{FencePosition, FenceTracker};
use crate::utils::line_classifier::is_image_path;
use crate::utils::regex_cache::ANY_LINK_REGEX;
use regex::Captures;
use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathAdjustment {
    levels_up: usize,
}

impl PathAdjustment {
    pub fn new(levels_up: usize) -> Self {
        Self { levels_up }
    }

    /// How many directories `target` sits below `source`.
    ///
    /// Zero when `target` is not inside `source`. Both paths are resolved
    /// first, so `..` segments and symlinked ancestors compare correctly
    /// even when the target does not exist yet.
    pub fn between(source: &Path, target: &Path) -> Self {
        let source = resolve(source);
        let target = resolve(target);

        let levels_up = match target.strip_prefix(&source) {
            Ok(rest) => rest
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count(),
            Err(_) => 0,
        };

        Self { levels_up }
    }

    pub fn levels_up(&self) -> usize {
        self.levels_up
    }

    fn adjust_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if let Some(rest) = path.strip_prefix("./") {
            Cow::Owned(format!("{}{rest}", "../".repeat(self.levels_up)))
        } else if path.starts_with("../") {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("{}{path}", "../".repeat(self.levels_up)))
        }
    }

    /// The rewritten link, or `None` when it must stay as written
    fn rewrite_link(&self, caps: &Captures<'_>) -> Option<String> {
        let bang = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str());
        let path = caps.get(3).map_or("", |m| m.as_str()).trim();

        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
            return None;
        }
        if bang != "!" && !is_image_path(path) {
            return None;
        }

        let adjusted = self.adjust_path(path);
        if adjusted == path {
            return None;
        }
        Some(format!("{bang}[{text}]({adjusted})"))
    }

    fn adjust_line_counted<'a>(&self, line: &'a str, adjusted: &mut usize) -> Cow<'a, str> {
        if self.levels_up == 0 || !line.contains("](") {
            return Cow::Borrowed(line);
        }
        ANY_LINK_REGEX.replace_all(line, |caps: &Captures<'_>| match self.rewrite_link(caps) {
            Some(link) => {
                *adjusted += 1;
                link
            }
            None => caps[0].to_string(),
        })
    }

    /// Rewrite every relative image reference on one line
    pub fn adjust_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.adjust_line_counted(line, &mut 0)
    }

    /// Rewrite image references across a section, leaving fenced code alone.
    ///
    /// Returns the rewritten lines and how many references were changed.
    pub fn adjust_lines(&self, lines: &[String]) -> (Vec<String>, usize) {
        let mut fence = FenceTracker::new();
        let mut adjusted = 0;
        let rewritten = lines
            .iter()
            .map(|line| match fence.observe(line) {
                FencePosition::Outside => self.adjust_line_counted(line, &mut adjusted).into_owned(),
                _ => line.clone(),
            })
            .collect();
        (rewritten, adjusted)
    }
}

/// Absolute form of `path` with `.` and `..` folded away.
///
/// The deepest existing ancestor is canonicalized and the missing tail is
/// appended to it unchanged.
fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut lexical = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                lexical.pop();
            }
            Component::CurDir => {}
            other => lexical.push(other),
        }
    }

    let mut existing = lexical.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(real) = fs::canonicalize(existing) {
            return missing.iter().rev().fold(real, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return lexical,
        }
    }
}
