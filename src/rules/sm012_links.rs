/// Rule SM012: Convert Markdown links to emphasized text
///
/// The target editor does not support `[text](url)`. Links become
/// `*text (url)*` with the protocol removed. Images (`![alt](path)`) and
/// links whose target is an image file are left exactly as they are.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::is_image_path;
use crate::utils::regex_cache::{INLINE_LINK_REGEX, URL_PROTOCOL_PREFIX_REGEX, has_link_markers};
use regex::Captures;

#[derive(Debug, Clone, Default)]
pub struct SM012Links;

impl SM012Links {
    pub fn new() -> Self {
        Self
    }

    fn convert(caps: &Captures<'_>) -> String {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let is_image = caps.get(1).is_some_and(|m| m.as_str() == "!");
        let text = caps.get(2).map_or("", |m| m.as_str());
        let url = caps.get(3).map_or("", |m| m.as_str());

        if is_image || is_image_path(url) {
            return whole.to_string();
        }

        let url = URL_PROTOCOL_PREFIX_REGEX.replace(url, "");
        format!("*{text} ({url})*")
    }
}

impl Rule for SM012Links {
    fn name(&self) -> &'static str {
        "SM012"
    }

    fn description(&self) -> &'static str {
        "Convert [text](url) links to *text (url)*"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        LineOutcome::keep(INLINE_LINK_REGEX.replace_all(line, |caps: &Captures<'_>| Self::convert(caps)))
    }

    fn should_skip(&self, line: &str) -> bool {
        !has_link_markers(line)
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Link
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
        apply_rule(&SM012Links::new(), line).into_line().unwrap()
    }

    #[test]
    fn test_link_converted() {
        assert_eq!(fix("[Docs](https://example.org/path)"), "*Docs (example.org/path)*");
        assert_eq!(fix("see [GitHub](github.com) now"), "see *GitHub (github.com)* now");
    }

    #[test]
    fn test_image_untouched() {
        assert_eq!(fix("![alt](./diagram.svg)"), "![alt](./diagram.svg)");
        assert_eq!(fix("![remote](https://cdn.io/pic)"), "![remote](https://cdn.io/pic)");
    }

    #[test]
    fn test_link_to_image_file_untouched() {
        assert_eq!(fix("[full size](./chart.PNG)"), "[full size](./chart.PNG)");
    }

    #[test]
    fn test_relative_document_link_converted() {
        assert_eq!(fix("[next](02_intro.md)"), "*next (02_intro.md)*");
    }

    #[test]
    fn test_empty_text_untouched() {
        assert_eq!(fix("[](x.md)"), "[](x.md)");
    }
}
