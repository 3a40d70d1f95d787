pub mod config;
pub mod exit_codes;
pub mod file_processor;
pub mod parallel;
pub mod passes;
pub mod pipeline;
pub mod rule;
pub mod rules;
pub mod splitter;
pub mod utils;

pub use crate::pipeline::Pipeline;
pub use crate::rule::{LineOutcome, Rule, RuleCategory};
pub use crate::splitter::{PathAdjustment, split_document};
pub use rules::*;

/// Simplify a whole document with the default rule set.
///
/// Line endings are normalized to LF; a trailing newline is kept if present.
pub fn simplify_text(content: &str) -> String {
    Pipeline::default().simplify_text(content)
}
