//!
//! Code-fence tracking shared by every pass over a document.
//!
//! The tracker is a single boolean flipped on each fence delimiter. There is
//! no nesting and no matching of fence lengths: a document with an odd number
//! of delimiters leaves everything after the last one inside a fence.

use crate::utils::line_classifier::is_fence_delimiter;

/// Where a line sits relative to fenced code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FencePosition {
    /// The line is a fence delimiter (opening or closing)
    Delimiter,
    /// The line is inside a fenced region
    Inside,
    /// Ordinary line outside any fence
    Outside,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FenceTracker {
    in_fence: bool,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next line of the document, toggling state on delimiters
    pub fn observe(&mut self, line: &str) -> FencePosition {
        if is_fence_delimiter(line) {
            self.in_fence = !self.in_fence;
            FencePosition::Delimiter
        } else if self.in_fence {
            FencePosition::Inside
        } else {
            FencePosition::Outside
        }
    }

    pub fn in_fence(&self) -> bool {
        self.in_fence
    }
}
