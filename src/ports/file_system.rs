//! Filesystem operations used by the four commands.
//!
//! Paths are taken as the user typed them (relative paths resolve against
//! the process working directory). Implementations translate raw I/O
//! failures into the `AppError` categories callers match on.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, TreeEntry};

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, PathKind::Directory)
    }
}

/// Port for the filesystem calls fops performs.
pub trait FileSystem {
    /// Resolve a path to an absolute path without touching the filesystem.
    fn absolute(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Stat a path. `Ok(None)` when nothing exists there, `AccessError` when
    /// the path cannot be inspected.
    fn kind(&self, path: &Path) -> Result<Option<PathKind>, AppError>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Create a new file with the given content. Fails with `AlreadyExists`
    /// instead of truncating an existing file.
    fn create_new(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a text file line by line, without line terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, AppError>;

    /// Read the direct children of a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<TreeEntry>, AppError>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
