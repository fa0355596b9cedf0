//! Content directory scanning

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FeedError;

/// Extension of content files, matched literally and case-sensitively
pub const MARKDOWN_EXTENSION: &str = ".md";

/// List the Markdown files directly inside `dir`, in directory listing order.
///
/// Subdirectories and other files are skipped. Failing to open the directory
/// is fatal for the generation cycle.
pub fn scan(dir: &Path) -> Result<Vec<PathBuf>, FeedError> {
    let entries = fs::read_dir(dir).map_err(|source| FeedError::ContentDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir && is_markdown_file(&entry.path()) {
            files.push(entry.path());
        }
    }

    tracing::debug!("Found {} markdown files in {:?}", files.len(), dir);
    Ok(files)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(MARKDOWN_EXTENSION))
        .unwrap_or(false)
}
