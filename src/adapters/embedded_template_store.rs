use include_dir::{Dir, include_dir};

use crate::domain::Language;
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/language_templates");

/// Template store backed by files compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

fn asset_name(language: Language) -> &'static str {
    match language {
        Language::Go => "main.go",
        Language::JavaScript => "main.js",
        Language::Python => "main.py",
        Language::Php => "main.php",
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template(&self, language: Language) -> Option<String> {
        TEMPLATES_DIR
            .get_file(asset_name(language))
            .and_then(|file| file.contents_utf8())
            .map(|s| s.to_string())
    }
}
