//! File processing for directory pairs.
//!
//! This module handles file discovery and the read, transform, write cycle
//! for both the simplify and the split commands.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
