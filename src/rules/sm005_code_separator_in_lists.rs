/// Rule SM005: Inline code followed by a separator in lists
///
/// `` - `RAISE NOTICE` — prints a message `` loses its explanation in the
/// target editor. The code markers are removed and the separator (em-dash,
/// colon or hyphen) is kept with normalized spacing.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use regex::Regex;
use std::sync::LazyLock;

static EM_DASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:-|\d+\.)\s+)`([^`]+)`\s*—\s*(.+)$").unwrap());
static COLON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:-|\d+\.)\s+)`([^`]+)`\s*:\s*(.+)$").unwrap());
static HYPHEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:-|\d+\.)\s+)`([^`]+)`\s*-\s*(.+)$").unwrap());

#[derive(Debug, Clone, Default)]
pub struct SM005CodeSeparatorInLists;

impl SM005CodeSeparatorInLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM005CodeSeparatorInLists {
    fn name(&self) -> &'static str {
        "SM005"
    }

    fn description(&self) -> &'static str {
        "Unwrap inline code followed by a dash or colon inside list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        let candidates: [(&Regex, &str); 3] = [
            (&*EM_DASH_REGEX, "${1}${2} — ${3}"),
            (&*COLON_REGEX, "${1}${2}: ${3}"),
            (&*HYPHEN_REGEX, "${1}${2} - ${3}"),
        ];

        for (re, replacement) in candidates {
            if re.is_match(line) {
                return LineOutcome::keep(re.replace(line, replacement));
            }
        }
        LineOutcome::keep(line)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::apply_rule;

    fn fix(line: &str) -> String {
        apply_rule(&SM005CodeSeparatorInLists::new(), line).into_line().unwrap()
    }

    #[test]
    fn test_em_dash() {
        assert_eq!(fix("- `RAISE NOTICE` — prints a message"), "- RAISE NOTICE — prints a message");
    }

    #[test]
    fn test_colon_spacing_normalized() {
        assert_eq!(fix("- `PRIMARY KEY` : uniqueness"), "- PRIMARY KEY: uniqueness");
    }

    #[test]
    fn test_hyphen() {
        assert_eq!(fix("1. `code`-explanation"), "1. code - explanation");
    }

    #[test]
    fn test_code_without_separator_untouched() {
        assert_eq!(fix("- use `DROP TABLE` carefully"), "- use `DROP TABLE` carefully");
    }
}
