/// Rule SM009: Unwrap simple HTML tags
///
/// `<b>`/`<strong>` become bold markers, `<i>`/`<em>` become italic markers,
/// and any other single-level `<tag>content</tag>` is replaced by its content.
/// On list items bold tags become plain text, since list bold has already been
/// stripped by the time this rule runs.
/// One pass, not recursive: nested or unmatched tags may be left behind.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_list_item;
use crate::utils::regex_cache::{fancy_replace_all, has_html_tags};
use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

static BOLD_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<b>([^<]+)</b>").unwrap());
static ITALIC_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<i>([^<]+)</i>").unwrap());
static STRONG_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<strong>([^<]+)</strong>").unwrap());
static EM_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<em>([^<]+)</em>").unwrap());
// Back-reference to the opening tag name needs fancy_regex
static SIMPLE_TAG_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?i)<([a-z]+)>([^<]+)</\1>").unwrap());

#[derive(Debug, Clone, Default)]
pub struct SM009HtmlTags;

impl SM009HtmlTags {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM009HtmlTags {
    fn name(&self) -> &'static str {
        "SM009"
    }

    fn description(&self) -> &'static str {
        "Replace simple HTML tags with Markdown or plain text"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        let bold = if is_list_item(line) { "${1}" } else { "**${1}**" };
        let result = BOLD_TAG_REGEX.replace_all(line, bold);
        let result = ITALIC_TAG_REGEX.replace_all(&result, "*${1}*");
        let result = STRONG_TAG_REGEX.replace_all(&result, bold);
        let result = EM_TAG_REGEX.replace_all(&result, "*${1}*").into_owned();

        let result = fancy_replace_all(&SIMPLE_TAG_REGEX, &result, |caps| {
            caps.get(2).map_or(String::new(), |m| m.as_str().to_string())
        });

        LineOutcome::Keep(result)
    }

    fn should_skip(&self, line: &str) -> bool {
        !has_html_tags(line)
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Html
    }

    fn from_config(_config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
