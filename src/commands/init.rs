//! Handler for the `init` command.

use anyhow::Context;
use mdsimplify_lib::config::create_default_config;
use std::path::Path;

/// Write a default configuration file to `path`
pub fn handle_init(path: &Path, quiet: bool) -> anyhow::Result<()> {
    create_default_config(path).with_context(|| format!("Failed to create config file {}", path.display()))?;

    if !quiet {
        println!("Created default configuration file: {}", path.display());
    }
    Ok(())
}
