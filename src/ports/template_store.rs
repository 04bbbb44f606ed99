use crate::domain::Language;

/// Port for looking up the boilerplate written into new source files.
pub trait TemplateStore {
    /// Template for a language, or `None` when the file should start empty.
    fn template(&self, language: Language) -> Option<String>;
}
