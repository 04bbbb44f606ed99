//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the real filesystem and processes.

use crate::adapters::{
    DialoguerDeletePrompter, EmbeddedTemplateStore, LocalFileSystem, ProcessEditorLauncher,
};
use crate::app::{
    AppContext,
    commands::{create, delete, open, read},
};
use crate::ports::DeletePrompter;

pub use crate::app::commands::create::CreateOutcome;
pub use crate::app::commands::delete::DeleteOutcome;
pub use crate::app::commands::open::OpenOutcome;
pub use crate::app::commands::read::ReadOutcome;
pub use crate::app::config::{CreateOptions, DeleteOptions, OpenFileOptions, ReadDirOptions};
pub use crate::domain::{AppError, Language, Viewer};

/// Create the production `AppContext`.
fn create_context() -> AppContext<LocalFileSystem, EmbeddedTemplateStore, ProcessEditorLauncher> {
    AppContext::new(LocalFileSystem::new(), EmbeddedTemplateStore::new(), ProcessEditorLauncher::new())
}

// =============================================================================
// Create Command API
// =============================================================================

/// Create a templated source file.
pub fn create_file(options: &CreateOptions) -> Result<CreateOutcome, AppError> {
    create::execute(&create_context(), options)
}

/// Validate a prospective file name without creating anything.
pub fn validate_new_file(file: &str) -> Result<Language, AppError> {
    create::validate(&LocalFileSystem::new(), file)
}

// =============================================================================
// Open Command API
// =============================================================================

/// Print a file or launch an editor for it.
pub fn open_file(options: &OpenFileOptions) -> Result<OpenOutcome, AppError> {
    open::execute(&create_context(), options)
}

/// Validate that a file exists and is not a directory.
pub fn validate_existing_file(file: &str) -> Result<(), AppError> {
    open::validate(&LocalFileSystem::new(), file)
}

// =============================================================================
// Read Command API
// =============================================================================

/// Render the directory tree under a path.
pub fn read_dir(options: &ReadDirOptions) -> Result<ReadOutcome, AppError> {
    read::execute(&create_context(), options)
}

// =============================================================================
// Delete Command API
// =============================================================================

/// Delete a path after the interactive terminal wizard.
pub fn delete_path(options: &DeleteOptions) -> Result<DeleteOutcome, AppError> {
    delete_path_with(options, &mut DialoguerDeletePrompter::new())
}

/// Delete a path, driving the wizard with a caller-supplied prompter.
pub fn delete_path_with<P: DeletePrompter>(
    options: &DeleteOptions,
    prompter: &mut P,
) -> Result<DeleteOutcome, AppError> {
    delete::execute(&LocalFileSystem::new(), prompter, options)
}

/// Validate that a path exists before offering it for deletion.
pub fn validate_existing_path(path: &str) -> Result<(), AppError> {
    delete::resolve_target(&LocalFileSystem::new(), path).map(|_| ())
}
