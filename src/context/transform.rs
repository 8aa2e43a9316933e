use std::{fs, path::Path};

use tracing::debug;

use crate::constants::{NESTED_PREFIX, PREAMBLE_PREFIXES, STRIPPED_MODIFIERS};
use crate::context::types::FileContents;
use crate::error::{BundleError, TransformError};

/// Rewrites one top-level Java source so it can live nested inside `Player`.
///
/// Leading `package`/`import`/Javadoc/blank lines are dropped (prefix match
/// on the raw line), a leading `public` or `private` token is removed, and
/// the result is prefixed with `static `.
///
/// The modifier is only recognised when followed by a space: `public\nclass`
/// is left as is.
pub fn transform_source(source: &str) -> Result<String, TransformError> {
    let mut rest = source;
    loop {
        if rest.is_empty() {
            return Err(TransformError::NoDeclaration);
        }
        let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        if !is_preamble(&rest[..line_end]) {
            break;
        }
        rest = &rest[line_end..];
    }

    let (token, remainder) = rest.split_once(' ').ok_or(TransformError::NoSpace)?;
    let body = if STRIPPED_MODIFIERS.iter().any(|m| *m == token) {
        remainder
    } else {
        rest
    };
    Ok(format!("{NESTED_PREFIX}{body}"))
}

fn is_preamble(line: &str) -> bool {
    is_blank(line) || PREAMBLE_PREFIXES.iter().any(|p| line.starts_with(p))
}

// The file/group/record/unit separators (U+001C..U+001F) count as blank too.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Reads `path` and returns its transformed contents.
pub fn read_file(path: &Path) -> Result<FileContents, BundleError> {
    let raw = fs::read_to_string(path).map_err(|source| BundleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = transform_source(&normalize_newlines(raw)).map_err(|source| {
        BundleError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "transformed source");
    Ok(FileContents {
        path: path.to_path_buf(),
        contents,
    })
}

// CRLF and lone CR become LF, as a text-mode read would see them.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
