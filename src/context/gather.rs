pub use crate::context::transform::read_file;
pub use crate::context::types::FileContents;

use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::glob;
use ignore::WalkBuilder;
use path_slash::PathBufExt;

use crate::error::BundleError;

/// Lists the regular files directly inside `dir` (no recursion).
///
/// Without `sort` the order is whatever the platform's directory listing
/// returns. Each entry is classified by what it resolves to: a symlink to a
/// regular file counts as a file, while subdirectories, links to directories
/// and dangling links are skipped. Only failing to list `dir` itself is an
/// error.
pub fn list_directory(
    dir: &Path,
    sort: bool,
) -> Result<Vec<PathBuf>, BundleError> {
    fs::read_dir(dir).map_err(|source| BundleError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut builder = WalkBuilder::new(dir);
    builder
        .max_depth(Some(1))
        .standard_filters(false)
        .follow_links(false);
    if sort {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut results = Vec::new();
    for entry_result in builder.build() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Could not process entry in {:?}: {}", dir, e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if is_regular_file(entry.path()) {
            results.push(entry.into_path());
        }
    }
    Ok(results)
}

// Follows symlinks; anything that cannot be stat'ed is not a file.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Resolves one `files` entry against `base_dir`.
///
/// Entries with glob metacharacters expand to the regular files they match,
/// in lexical order. An entry that matches nothing (or is a plain path) comes
/// back as the literal joined path, so a missing file still fails on read.
pub fn expand_file_entry(
    base_dir: &Path,
    entry: &str,
) -> Result<Vec<PathBuf>, BundleError> {
    let joined = base_dir.join(entry);
    if !entry.contains(['*', '?', '[']) {
        return Ok(vec![joined]);
    }

    // Normalize Windows path separators for glob patterns
    let pattern = base_dir
        .join(entry.replace('\\', "/"))
        .to_slash_lossy()
        .to_string();
    let matches = glob(&pattern).map_err(|e| BundleError::Pattern {
        pattern: entry.to_string(),
        reason: e.to_string(),
    })?;

    let mut expanded = Vec::new();
    for path_res in matches {
        let path = path_res.map_err(|e| BundleError::Read {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            expanded.push(path);
        }
    }
    if expanded.is_empty() {
        expanded.push(joined);
    }
    Ok(expanded)
}
