//!
//! This module defines the Rule trait and related types for implementing rewrite rules in mdsimplify.
//! A rule is a pure function of one line: it either keeps the line (possibly rewritten) or drops it.

use crate::config::Config;

/// Result of applying a rule to a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep the line, possibly rewritten
    Keep(String),
    /// Remove the line from the document
    Drop,
}

impl LineOutcome {
    pub fn keep(line: impl Into<String>) -> Self {
        LineOutcome::Keep(line.into())
    }

    /// The kept line, or `None` when the line was dropped
    pub fn into_line(self) -> Option<String> {
        match self {
            LineOutcome::Keep(line) => Some(line),
            LineOutcome::Drop => None,
        }
    }
}

/// Type of rule, used when listing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Heading,
    List,
    Link,
    Html,
    Emphasis,
    Blockquote,
    Code,
    Other,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Heading => "heading",
            RuleCategory::List => "list",
            RuleCategory::Link => "link",
            RuleCategory::Html => "html",
            RuleCategory::Emphasis => "emphasis",
            RuleCategory::Blockquote => "blockquote",
            RuleCategory::Code => "code",
            RuleCategory::Other => "other",
        }
    }
}

pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Apply the rule to one line outside fenced code.
    ///
    /// Must be total: malformed constructs are passed through unchanged.
    fn apply(&self, line: &str) -> LineOutcome;

    /// Check if this rule can quickly skip a line based on its content
    fn should_skip(&self, _line: &str) -> bool {
        false
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Other
    }

    /// Factory: create a rule from config (if present), or use defaults.
    fn from_config(config: &Config) -> Box<dyn Rule>
    where
        Self: Sized;
}

/// Apply a rule, honouring its fast skip check
pub fn apply_rule(rule: &dyn Rule, line: &str) -> LineOutcome {
    if rule.should_skip(line) {
        LineOutcome::keep(line)
    } else {
        rule.apply(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Shout;

    impl Rule for Shout {
        fn name(&self) -> &'static str {
            "TEST"
        }

        fn description(&self) -> &'static str {
            "Uppercase lines"
        }

        fn apply(&self, line: &str) -> LineOutcome {
            LineOutcome::keep(line.to_uppercase())
        }

        fn should_skip(&self, line: &str) -> bool {
            line.starts_with('#')
        }

        fn from_config(_config: &Config) -> Box<dyn Rule> {
            Box::new(Shout)
        }
    }

    #[test]
    fn test_apply_rule_respects_should_skip() {
        assert_eq!(apply_rule(&Shout, "# keep"), LineOutcome::keep("# keep"));
        assert_eq!(apply_rule(&Shout, "loud"), LineOutcome::keep("LOUD"));
    }

    #[test]
    fn test_into_line() {
        assert_eq!(LineOutcome::keep("x").into_line(), Some("x".to_string()));
        assert_eq!(LineOutcome::Drop.into_line(), None);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(RuleCategory::List.as_str(), "list");
        assert_eq!(RuleCategory::Other.as_str(), "other");
    }
}
