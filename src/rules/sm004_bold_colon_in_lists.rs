/// Rule SM004: Bold label with colon in lists
///
/// The target editor drops everything after a bold label ending in a colon
/// inside a list item. Both surface forms are flattened to plain text:
///
/// ```markdown
/// - **FUNCTION:** computes a value
/// - **FUNCTION**: computes a value
/// ```
///
/// become `- FUNCTION: computes a value`.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use regex::Regex;
use std::sync::LazyLock;

static COLON_INSIDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:-|\d+\.)\s+)\*\*([^*]+):\*\*\s*(.+)$").unwrap());
static COLON_OUTSIDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:-|\d+\.)\s+)\*\*([^*]+)\*\*:\s*(.+)$").unwrap());

#[derive(Debug, Clone, Default)]
pub struct SM004BoldColonInLists;

impl SM004BoldColonInLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM004BoldColonInLists {
    fn name(&self) -> &'static str {
        "SM004"
    }

    fn description(&self) -> &'static str {
        "Flatten bold labels ending in a colon inside list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        for re in [&*COLON_INSIDE_REGEX, &*COLON_OUTSIDE_REGEX] {
            if re.is_match(line) {
                return LineOutcome::keep(re.replace(line, "${1}${2}: ${3}"));
            }
        }
        LineOutcome::keep(line)
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
