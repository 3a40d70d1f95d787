mod sm001_reveal_labels;
mod sm002_heading_level;
mod sm003_checklists;
mod sm004_bold_colon_in_lists;
mod sm005_code_separator_in_lists;
mod sm006_bold_in_lists;
mod sm007_code_in_lists;
mod sm008_emoji_in_lists;
mod sm009_html_tags;
mod sm010_blockquotes;
mod sm011_bare_urls;
mod sm012_links;
pub mod sm013_operators;
mod sm014_inline_code;
mod sm015_technical_terms;
mod sm016_italic_in_numbered_lists;

pub use sm001_reveal_labels::SM001RevealLabels;
pub use sm002_heading_level::SM002HeadingLevel;
pub use sm003_checklists::SM003Checklists;
pub use sm004_bold_colon_in_lists::SM004BoldColonInLists;
pub use sm005_code_separator_in_lists::SM005CodeSeparatorInLists;
pub use sm006_bold_in_lists::SM006BoldInLists;
pub use sm007_code_in_lists::SM007CodeInLists;
pub use sm008_emoji_in_lists::SM008EmojiInLists;
pub use sm009_html_tags::SM009HtmlTags;
pub use sm010_blockquotes::SM010Blockquotes;
pub use sm011_bare_urls::SM011BareUrls;
pub use sm012_links::SM012Links;
pub use sm013_operators::SM013Operators;
pub use sm014_inline_code::SM014InlineCode;
pub use sm015_technical_terms::SM015TechnicalTerms;
pub use sm016_italic_in_numbered_lists::SM016ItalicInNumberedLists;

use crate::rule::Rule;

/// Returns every rule in the order the pipeline applies them
pub fn all_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    macro_rules! rule {
        ($ctor:ident) => {
            $ctor::from_config(config)
        };
    }
    // Order matters: list-specific rules must see the original markup before
    // the generic HTML, link and code conversions rewrite it.
    vec![
        rule!(SM001RevealLabels),
        rule!(SM002HeadingLevel),
        rule!(SM003Checklists),
        rule!(SM004BoldColonInLists),
        rule!(SM005CodeSeparatorInLists),
        rule!(SM006BoldInLists),
        rule!(SM007CodeInLists),
        rule!(SM008EmojiInLists),
        rule!(SM009HtmlTags),
        rule!(SM010Blockquotes),
        rule!(SM011BareUrls),
        rule!(SM012Links),
        rule!(SM013Operators),
        rule!(SM014InlineCode),
        rule!(SM015TechnicalTerms),
        rule!(SM016ItalicInNumberedLists),
    ]
}
