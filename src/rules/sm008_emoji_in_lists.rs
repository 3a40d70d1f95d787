/// Rule SM008: Emoji at the start of a list item
///
/// `- 🔥 70% of projects` renders as just the emoji in the target editor.
/// A colon right after the emoji keeps the rest: `- 🔥: 70% of projects`.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::EMOJI_CLASS;
use regex::Regex;
use std::sync::LazyLock;

static EMOJI_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^(\s*(?:-|\d+\.)\s+)({EMOJI_CLASS})\s+(.+)$")).unwrap());

#[derive(Debug, Clone, Default)]
pub struct SM008EmojiInLists;

impl SM008EmojiInLists {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM008EmojiInLists {
    fn name(&self) -> &'static str {
        "SM008"
    }

    fn description(&self) -> &'static str {
        "Insert a colon after an emoji that starts a list item"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        LineOutcome::keep(EMOJI_ITEM_REGEX.replace(line, "${1}${2}: ${3}"))
    }

    fn should_skip(&self, line: &str) -> bool {
        line.is_ascii()
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
