/// Rule SM007: Strip inline code inside list items
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_list_item;
use crate::utils::regex_cache::CODE_SPAN_REGEX;

#[derive(Debug, Clone, Default)]
pub struct SM007CodeInLists;

impl SM007CodeInLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM007CodeInLists {
    fn name(&self) -> &'static str {
        "SM007"
    }

    fn description(&self) -> &'static str {
        "Strip inline code markers inside list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if !is_list_item(line) {
            return LineOutcome::keep(line);
        }
        LineOutcome::keep(CODE_SPAN_REGEX.replace_all(line, "${1}"))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.contains('`')
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn from_config(_config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
