//! Whole-document passes that run before the per-line rules.

mod collapsible_blocks;
mod nested_lists;

pub use collapsible_blocks::expand_collapsible_blocks;
pub use nested_lists::unify_nested_lists;
