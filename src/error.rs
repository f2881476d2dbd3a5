//! Error types for project-setup
//!
//! The scaffolder has exactly one runtime failure kind, [`FilesystemError`].
//! Layout problems are caught before anything is written and surface as
//! [`LayoutError`]. [`ScaffoldError`] is what `create_structure` returns.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDir,
    WriteFile,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsOperation::CreateDir => write!(f, "create directory"),
            FsOperation::WriteFile => write!(f, "write file"),
        }
    }
}

/// A directory-creation or file-write step could not complete.
///
/// Covers permission failures, path-type collisions (target exists as a
/// non-directory) and I/O exhaustion. `path` is relative to the scaffold root.
#[derive(Error, Debug)]
#[error("failed to {operation} `{}`: {source}", .path.display())]
pub struct FilesystemError {
    pub operation: FsOperation,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FilesystemError {
    pub fn new(operation: FsOperation, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            operation,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Underlying OS error kind
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Rejected layout configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout lists no directories")]
    Empty,

    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("directory `{0}` is listed more than once")]
    Duplicate(String),

    #[error("`{path}` lies outside the scaffolded directories")]
    Uncovered { path: String },

    #[error("marker `{0}` collides with a scaffolded directory")]
    MarkerCollides(String),
}

/// Failure of a scaffold run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Layout rejected; nothing was written
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
