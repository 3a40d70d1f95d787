/// Rule SM014: Inline code to italics
///
/// The target editor turns inline code in running text into a separate code
/// block. Every remaining `` `text` `` span becomes `*text*`.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_fence_delimiter;
use crate::utils::regex_cache::CODE_SPAN_REGEX;

#[derive(Debug, Clone, Default)]
pub struct SM014InlineCode;

impl SM014InlineCode {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM014InlineCode {
    fn name(&self) -> &'static str {
        "SM014"
    }

    fn description(&self) -> &'static str {
        "Convert inline code spans to italics"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if is_fence_delimiter(line) {
            return LineOutcome::keep(line);
        }
        LineOutcome::keep(CODE_SPAN_REGEX.replace_all(line, "*${1}*"))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.contains('`')
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Code
    }

    fn from_config(_config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
