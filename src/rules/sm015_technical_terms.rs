/// Rule SM015: Italicize technical terms
///
/// The target editor misclassifies bare identifiers such as `course_title`
/// or `users` as code. Wrapping them in italics first prevents that.
///
/// Two kinds of terms are wrapped:
/// - lowercase identifiers containing an underscore (`student_id`)
/// - lowercase words of four or more letters that are not common English words
///
/// Lines that are tables, list items, headings or horizontal rules are left
/// alone, as is anything already emphasized or next to an emphasis marker.
/// Image spans (`![alt](path)`) are skipped entirely so their paths stay valid.
use crate::config::Config;
use crate::rule::{LineOutcome, Rule, RuleCategory};
use crate::utils::line_classifier::{is_fence_delimiter, is_heading, is_list_item, is_table_row};
use crate::utils::regex_cache::fancy_replace_all;
use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

// Images, then bold and italic spans, in the order they must be tried
static PROTECTED_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]+\]\([^)]+\)|\*\*[^*]+\*\*|\*[^*\s](?:[^*]*[^*\s])?\*").unwrap()
});

static SNAKE_CASE_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<![*])\b([a-z][a-z0-9]*(?:_[a-z0-9]+)+)\b(?![*])").unwrap());
// Not after a hyphen, so `NULL-able` stays intact
static LOWERCASE_WORD_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<![-*])\b([a-z]{4,})\b(?![*])").unwrap());

static COMMON_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "is", "are", "was", "were", "be", "been", "being",
    "and", "or", "not", "but", "if", "the", "a", "an",
    "in", "on", "at", "to", "for", "of", "with", "by",
    "as", "it", "this", "that", "from", "all", "can",
    "will", "would", "should", "could", "may", "might",
    "do", "does", "did", "have", "has", "had",
    "get", "set", "use", "make", "take", "go", "see",
    "new", "old", "first", "last", "next", "one", "two",
    "when", "where", "why", "how", "what", "which",
    "some", "any", "many", "much", "few", "more", "most",
    "only", "just", "also", "even", "well", "way", "back",
    "time", "year", "work", "part", "case", "over", "than",
    "able", "data", "into", "then", "them", "each", "such",
};

#[derive(Debug, Clone, Default)]
pub struct SM015TechnicalTerms;

impl SM015TechnicalTerms {
    pub fn new() -> Self {
        Self
    }

    fn is_exempt_line(line: &str) -> bool {
        is_fence_delimiter(line)
            || is_table_row(line)
            || is_heading(line)
            || line.trim() == "---"
            || is_list_item(line)
    }

    fn wrap_terms(text: &str) -> String {
        let wrapped = fancy_replace_all(&SNAKE_CASE_REGEX, text, |caps| format!("*{}*", &caps[1]));

        fancy_replace_all(&LOWERCASE_WORD_REGEX, &wrapped, |caps| {
            let word = &caps[1];
            if COMMON_WORDS.contains(word) {
                word.to_string()
            } else {
                format!("*{word}*")
            }
        })
    }

    /// Wrap terms in the text between images and emphasis, leaving those spans intact
    fn wrap_outside_protected(line: &str) -> String {
        let mut result = String::with_capacity(line.len() + 16);
        let mut last_end = 0;

        for span in PROTECTED_SPAN_REGEX.find_iter(line) {
            result.push_str(&Self::wrap_terms(&line[last_end..span.start()]));
            result.push_str(span.as_str());
            last_end = span.end();
        }

        result.push_str(&Self::wrap_terms(&line[last_end..]));
        result
    }
}

impl Rule for SM015TechnicalTerms {
    fn name(&self) -> &'static str {
        "SM015"
    }

    fn description(&self) -> &'static str {
        "Italicize technical terms outside lists, tables and headings"
    }

    fn apply(&self, line: &str) -> LineOutcome {
        if Self::is_exempt_line(line) {
            return LineOutcome::keep(line);
        }
        LineOutcome::Keep(Self::wrap_outside_protected(line))
    }

    fn should_skip(&self, line: &str) -> bool {
        !line.bytes().any(|b| b.is_ascii_lowercase())
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
