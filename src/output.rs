use std::{fs, path::Path};

use tracing::warn;

use crate::constants::CODINGAME_CHAR_LIMIT;
use crate::context::types::FileContents;
use crate::error::BundleError;

/// `prepend`, every file's contents in order with no separator, then `append`.
pub fn render(
    prepend: &str,
    files: &[FileContents],
    append: &str,
) -> String {
    let body_len: usize = files.iter().map(|f| f.contents.len()).sum();
    let mut out = String::with_capacity(prepend.len() + body_len + append.len());
    out.push_str(prepend);
    for file in files {
        out.push_str(&file.contents);
    }
    out.push_str(append);
    out
}

/// Warns when the bundle is too long to paste into CodinGame. Returns the
/// character count.
pub fn check_submission_size(bundle: &str) -> usize {
    let chars = bundle.chars().count();
    if chars > CODINGAME_CHAR_LIMIT {
        warn!(
            "bundle is {} characters, over the CodinGame limit of {}",
            chars, CODINGAME_CHAR_LIMIT
        );
    }
    chars
}

/// Writes the whole bundle to `path`, creating parent directories first.
pub fn write_bundle(
    path: &Path,
    bundle: &str,
) -> Result<(), BundleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| BundleError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bundle).map_err(|source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    })
}
