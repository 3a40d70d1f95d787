/// Rule SM011: Strip URL protocols
///
/// The target editor auto-links anything starting with `http://` or
/// `https://`. Removing the protocol keeps the address readable without
/// turning it into a link. Runs before link conversion, so link targets lose
/// their protocol here as well.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::regex_cache::{BARE_URL_PROTOCOL_REGEX, has_url_protocol};

#[derive(Debug, Clone, Default)]
pub struct SM011BareUrls;

impl SM011BareUrls {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SM011BareUrls {
    fn name(&self) -> &'static str {
        "SM011"
    }

    fn description(&self) -> &'static str {
        "Strip http(s) protocols from URLs"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        LineOutcome::keep(BARE_URL_PROTOCOL_REGEX.replace_all(line, "${1}"))
    }

    fn should_skip(&self, line: &str) -> bool {
        !has_url_protocol(line)
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
