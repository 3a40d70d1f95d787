/// Rule SM002: Normalize heading levels
///
/// Every ATX heading (`#` to `######`) is rewritten to one fixed level,
/// `###` unless configured otherwise. The heading text is preserved.
use crate::config::{Config, DEFAULT_HEADING_LEVEL};
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::regex_cache::ATX_HEADING_REGEX;

#[derive(Debug, Clone)]
pub struct SM002HeadingLevel {
    level: u8,
}

impl Default for SM002HeadingLevel {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_LEVEL)
    }
}

impl SM002HeadingLevel {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Rule for SM002HeadingLevel {
    fn name(&self) -> &'static str {
        "SM002"
    }

    fn description(&self) -> &'static str {
        "Normalize all headings to a single level"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        match ATX_HEADING_REGEX.captures(line) {
            Some(caps) => {
                let text = caps.get(2).map_or("", |m| m.as_str());
                LineOutcome::Keep(format!("{} {text}", "#".repeat(self.level as usize)))
            }
            None => LineOutcome::keep(line),
        }
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.starts_with('#')
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn from_config(config: &Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(Self::new(config.settings.heading_level))
    }
}
