/// Rule SM010: Strip blockquote markers
///
/// Removes one or more leading `> ` sequences. Operators such as `->` or
/// `>=` in the middle of a line are not blockquotes and are left alone.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::regex_cache::BLOCKQUOTE_PREFIX_REGEX;

#[derive(Debug, Clone, Default)]
pub struct SM010Blockquotes;

impl SM010Blockquotes {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM010Blockquotes {
    fn name(&self) -> &'static str {
        "SM010"
    }

    fn description(&self) -> &'static str {
        "Remove blockquote markers"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        LineOutcome::keep(BLOCKQUOTE_PREFIX_REGEX.replace(line, ""))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.trim_start().starts_with('>')
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Blockquote
    }

    fn from_config(_config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
