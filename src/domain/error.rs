use std::io;

use thiserror::Error;

/// Library-wide error type for fops operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside the categories below.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Empty or malformed user input.
    #[error("{0}")]
    InvalidInput(String),

    /// Extension is not in the creation allow-list.
    #[error("Invalid file extension '{extension}'. Allowed extensions are {allowed}")]
    InvalidExtension { extension: String, allowed: String },

    /// Target path does not exist.
    #[error("Path '{0}' does not exist")]
    NotFound(String),

    /// Target path already exists.
    #[error("File '{0}' already exists")]
    AlreadyExists(String),

    /// Target path exists but is not a directory.
    #[error("Path '{0}' is not a directory")]
    NotADirectory(String),

    /// Credential step rejected the submitted value.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Target path could not be inspected.
    #[error("Error accessing path '{path}': {details}")]
    AccessError { path: String, details: String },

    /// Removal of the target failed.
    #[error("Deletion failed for '{path}': {details}")]
    DeletionFailed { path: String, details: String },

    /// External editor could not be launched or exited unsuccessfully.
    #[error("Failed to launch '{program}': {details}")]
    LaunchFailed { program: String, details: String },

    /// Interactive prompt failed (no terminal, broken input stream).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidInput(_) | AppError::InvalidExtension { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::NotADirectory(_) => io::ErrorKind::NotADirectory,
            AppError::AuthenticationFailed(_) => io::ErrorKind::PermissionDenied,
            AppError::AccessError { .. }
            | AppError::DeletionFailed { .. }
            | AppError::LaunchFailed { .. }
            | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
