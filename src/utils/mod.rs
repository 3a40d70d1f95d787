pub mod code_fence;
pub mod line_classifier;
pub mod line_ending;
pub mod regex_cache;

pub use code_fence::{FencePosition, FenceTracker};
pub use line_ending::{SplitText, join_lines, split_lines};
