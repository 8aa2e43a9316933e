use std::path::PathBuf;

/// Transformed contents of one source file, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    pub path: PathBuf,
    pub contents: String,
}
