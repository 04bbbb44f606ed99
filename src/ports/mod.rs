mod delete_prompter;
mod editor_launcher;
mod file_system;
mod template_store;

pub use delete_prompter::DeletePrompter;
pub use editor_launcher::EditorLauncher;
pub use file_system::{FileSystem, PathKind};
pub use template_store::TemplateStore;
