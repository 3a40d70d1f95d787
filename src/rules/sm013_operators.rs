/// Rule SM013: Quote standalone operators
///
/// Operators such as `->` or `>=` at the start of a line or after whitespace
/// can be misread as Markdown by the target editor. When followed by
/// whitespace or an em-dash separator they are wrapped in double quotes:
///
/// ```markdown
/// -> — returns a JSON object
/// ```
///
/// becomes `"->" — returns a JSON object`.
///
/// Blockquote lines are exempt, but this rule runs after blockquote markers
/// have been stripped, so in the full pipeline the exemption never fires.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::{is_blockquote, is_fence_delimiter};
use crate::utils::regex_cache::fancy_replace_all;
use fancy_regex::Regex as FancyRegex;
use std::sync::LazyLock;

/// Arrow, double arrow, containment, existence, comparison and inequality
pub const OPERATORS: &[&str] = &["->", "->>", "@>", "?", "<=", ">=", "!="];

// The separator is only looked at, so `? ? x` quotes both operators in one pass
static OPERATOR_REGEXES: LazyLock<Vec<FancyRegex>> = LazyLock::new(|| {
    OPERATORS
        .iter()
        .map(|op| FancyRegex::new(&format!(r"(\s|^)({})(?=\s|—)", regex::escape(op))).unwrap())
        .collect()
});

#[derive(Debug, Clone, Default)]
pub struct SM013Operators;

impl SM013Operators {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM013Operators {
    fn name(&self) -> &'static str {
        "SM013"
    }

    fn description(&self) -> &'static str {
        "Wrap standalone operators in quotes"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if is_fence_delimiter(line) || is_blockquote(line) {
            return LineOutcome::keep(line);
        }

        let mut result = line.to_string();
        for re in OPERATOR_REGEXES.iter() {
            if re.is_match(&result).unwrap_or(false) {
                result = fancy_replace_all(re, &result, |caps| format!("{}\"{}\"", &caps[1], &caps[2]));
            }
        }
        LineOutcome::Keep(result)
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.contains(['-', '@', '?', '<', '>', '!'])
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Other
    }

    fn from_config(_config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
