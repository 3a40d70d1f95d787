//! Command handlers for the mdsimplify CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod init;
pub mod process;
pub mod rule;
