use crate::ports::{EditorLauncher, FileSystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: FileSystem, T: TemplateStore, E: EditorLauncher> {
    fs: F,
    templates: T,
    launcher: E,
}

impl<F: FileSystem, T: TemplateStore, E: EditorLauncher> AppContext<F, T, E> {
    /// Create a new application context.
    pub fn new(fs: F, templates: T, launcher: E) -> Self {
        Self { fs, templates, launcher }
    }

    /// Get a reference to the filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the editor launcher.
    pub fn launcher(&self) -> &E {
        &self.launcher
    }
}
