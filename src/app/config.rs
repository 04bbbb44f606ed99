//! Per-command options, built from CLI flags and passed explicitly.

use crate::domain::Viewer;

/// Options for `create`.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// File to create; its extension selects the language.
    pub file: String,
}

/// Options for `open`.
#[derive(Debug, Clone)]
pub struct OpenFileOptions {
    pub file: String,
    pub viewer: Viewer,
}

/// Options for `read`.
#[derive(Debug, Clone)]
pub struct ReadDirOptions {
    pub path: String,
    /// Include dot-prefixed entries.
    pub show_hidden: bool,
}

impl Default for ReadDirOptions {
    fn default() -> Self {
        Self { path: ".".to_string(), show_hidden: false }
    }
}

/// Options for `delete`.
#[derive(Debug, Clone)]
pub struct DeleteOptions {
    pub path: String,
}
