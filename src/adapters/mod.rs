pub mod dialoguer_prompter;
pub mod embedded_template_store;
pub mod local_filesystem;
pub mod process_editor;

pub use dialoguer_prompter::DialoguerDeletePrompter;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use local_filesystem::LocalFileSystem;
pub use process_editor::ProcessEditorLauncher;
