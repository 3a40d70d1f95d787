//! Discovery of the Markdown files a directory pair processes

use super::ProcessError;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// List the `.md` files directly inside `root`, sorted by path.
///
/// Subdirectories are not searched, and ignore files such as `.gitignore`
/// have no effect: every Markdown file at the top level is processed.
pub fn discover_markdown_files(root: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    if !root.is_dir() {
        return Err(ProcessError::Discovery {
            path: root.display().to_string(),
            message: "source directory does not exist".to_string(),
        });
    }

    let mut walk_builder = WalkBuilder::new(root);
    walk_builder.max_depth(Some(1)).standard_filters(false);

    let mut files = Vec::new();
    for entry in walk_builder.build() {
        let entry = entry.map_err(|e| ProcessError::Discovery {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        if entry.file_type().is_some_and(|t| t.is_file()) && is_markdown_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    log::debug!("[mdsimplify-discovery] {} Markdown files in {}", files.len(), root.display());
    Ok(files)
}
