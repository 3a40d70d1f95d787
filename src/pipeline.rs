//! The rewrite pipeline: whole-document passes followed by per-line rules.
//!
//! Rules run in a fixed order because later rules rely on the output of
//! earlier ones. Lines inside fenced code, and the fence delimiters
//! themselves, never reach the rules.

use crate::config::Config;
use crate::passes::{expand_collapsible_blocks, unify_nested_lists};
use crate::rule::{LineOutcome, Rule, apply_rule};
use crate::rules::all_rules;
use crate::utils::code_fence::{FencePosition, FenceTracker};
use crate::utils::line_ending::{join_lines, split_lines};

pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            rules: all_rules(config),
        }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Run every rule over one line, stopping as soon as a rule drops it
    pub fn apply_line(&self, line: &str) -> LineOutcome {
        let mut current = line.to_string();
        for rule in &self.rules {
            match apply_rule(rule.as_ref(), &current) {
                LineOutcome::Keep(next) => current = next,
                LineOutcome::Drop => {
                    log::trace!("[mdsimplify-pipeline] {} dropped line: {line}", rule.name());
                    return LineOutcome::Drop;
                }
            }
        }
        LineOutcome::Keep(current)
    }

    /// Transform a whole document given as lines
    pub fn run(&self, lines: &[String]) -> Vec<String> {
        let expanded = expand_collapsible_blocks(lines);
        let unified = unify_nested_lists(&expanded);

        let mut fence = FenceTracker::new();
        let mut result = Vec::with_capacity(unified.len());

        for line in unified {
            if fence.observe(&line) != FencePosition::Outside {
                result.push(line);
                continue;
            }
            if let LineOutcome::Keep(rewritten) = self.apply_line(&line) {
                result.push(rewritten);
            }
        }

        if fence.in_fence() {
            log::warn!("[mdsimplify-pipeline] Unclosed code fence: lines after the last fence were left unchanged");
        }

        result
    }

    /// Transform a document given as text. Output always uses LF and keeps
    /// the source's trailing newline, if any.
    pub fn simplify_text(&self, content: &str) -> String {
        let split = split_lines(content);
        let lines = self.run(&split.lines);
        join_lines(&lines, split.trailing_newline)
    }
}
