/// Exit codes for mdsimplify
///
/// These exit codes let scripts distinguish a partially failed batch from a
/// configuration or usage problem.
/// Success - Every discovered file was processed
pub const SUCCESS: i32 = 0;

/// One or more files could not be read, transformed or written
pub const FILES_FAILED: i32 = 1;

/// Tool error - Configuration error, missing directory pairs or invalid usage
pub const TOOL_ERROR: i32 = 2;

/// Early exit for errors that abort the whole run
pub mod exit {
    use super::TOOL_ERROR;

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
