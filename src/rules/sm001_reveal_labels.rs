/// Rule SM001: Remove reveal labels
///
/// Collapsible blocks are always expanded, so leftover "Show answer" style
/// labels that used to toggle them no longer mean anything and are dropped.
/// Blank lines are always kept: they separate blocks.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_reveal_label;

#[derive(Debug, Clone, Default)]
pub struct SM001RevealLabels;

impl SM001RevealLabels {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM001RevealLabels {
    fn name(&self) -> &'static str {
        "SM001"
    }

    fn description(&self) -> &'static str {
        "Remove leftover \"show answer\" labels"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if is_reveal_label(line) {
            LineOutcome::Drop
        } else {
            LineOutcome::keep(line)
        }
    }

    fn should_skip(&self, line: &str) -> bool {
        line.trim().is_empty()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::apply_rule;

    fn run(line: &str) -> LineOutcome {
        apply_rule(&SM001RevealLabels::new(), line)
    }

    #[test]
    fn test_drops_bold_label_with_eye() {
        assert_eq!(run("**👁️ Показать ответ**"), LineOutcome::Drop);
    }

    #[test]
    fn test_drops_english_label() {
        assert_eq!(run("Show solution"), LineOutcome::Drop);
        assert_eq!(run("  **SHOW RESULT**  "), LineOutcome::Drop);
    }

    #[test]
    fn test_keeps_blank_lines() {
        assert_eq!(run(""), LineOutcome::keep(""));
        assert_eq!(run("   "), LineOutcome::keep("   "));
    }

    #[test]
    fn test_keeps_regular_text() {
        assert_eq!(run("We show the answer below"), LineOutcome::keep("We show the answer below"));
        assert_eq!(run("Показать"), LineOutcome::keep("Показать"));
    }
}
