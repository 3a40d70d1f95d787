/// Rule SM016: Remove italics from numbered list items
///
/// Earlier rules introduce italics freely, but inside numbered lists the
/// target editor renders them inconsistently. Single-asterisk emphasis is
/// unwrapped on numbered lines only; bullets keep their italics.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_numbered_item;
use crate::utils::regex_cache::{ITALIC_REGEX, fancy_replace_all, has_emphasis_markers};

#[derive(Debug, Clone, Default)]
pub struct SM016ItalicInNumberedLists;

impl SM016ItalicInNumberedLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM016ItalicInNumberedLists {
    fn name(&self) -> &'static str {
        "SM016"
    }

    fn description(&self) -> &'static str {
        "Remove italics inside numbered list items"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if !is_numbered_item(line) {
            return LineOutcome::keep(line);
        }
        LineOutcome::Keep(fancy_replace_all(&ITALIC_REGEX, line, |caps| caps[1].to_string()))
    }

    fn should_skip(&self, line: &str) -> bool {
        !has_emphasis_markers(line)
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Emphasis
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
        apply_rule(&SM016ItalicInNumberedLists::new(), line).into_line().unwrap()
    }

    #[test]
    fn test_italics_removed_in_numbered_item() {
        assert_eq!(fix("1. Open *settings* and *profile*"), "1. Open settings and profile");
        assert_eq!(fix("   2. nested *item*"), "   2. nested item");
    }

    #[test]
    fn test_bullets_keep_italics() {
        assert_eq!(fix("- keep *this*"), "- keep *this*");
    }

    #[test]
    fn test_plain_text_keeps_italics() {
        assert_eq!(fix("text with *emphasis*"), "text with *emphasis*");
    }

    #[test]
    fn test_spaced_asterisks_untouched() {
        assert_eq!(fix("1. a * b * c"), "1. a * b * c");
    }
}
