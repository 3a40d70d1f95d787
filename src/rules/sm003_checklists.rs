/// Rule SM003: Checklists to plain lists
///
/// `- [ ] task` and `- [x] task` both become `- task`.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use regex::Regex;
use std::sync::LazyLock;

static CHECKBOX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*-)\s*\[[ xX]\]\s*").unwrap());

#[derive(Debug, Clone, Default)]
pub struct SM003Checklists;

impl SM003Checklists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM003Checklists {
    fn name(&self) -> &'static str {
        "SM003"
    }

    fn description(&self) -> &'static str {
        "Convert checklist items to plain list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        LineOutcome::keep(CHECKBOX_REGEX.replace(line, "${1} "))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.contains('[')
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
