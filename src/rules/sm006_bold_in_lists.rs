/// Rule SM006: Strip bold inside list items
///
/// The target editor loses bold content inside both bulleted and numbered
/// list items, so `**text**` is unwrapped to `text`.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_list_item;
use crate::utils::regex_cache::BOLD_REGEX;

#[derive(Debug, Clone, Default)]
pub struct SM006BoldInLists;

impl SM006BoldInLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM006BoldInLists {
    fn name(&self) -> &'static str {
        "SM006"
    }

    fn description(&self) -> &'static str {
        "Strip bold markers inside list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if !is_list_item(line) {
            return LineOutcome::keep(line);
        }
        LineOutcome::keep(BOLD_REGEX.replace_all(line, "${1}"))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.contains("**")
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
