use std::fmt;
use std::path::Path;

use super::AppError;

/// Languages `create` knows how to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    JavaScript,
    Python,
    Php,
}

impl Language {
    /// All supported languages, in allow-list order.
    pub const ALL: [Language; 4] =
        [Language::Go, Language::JavaScript, Language::Python, Language::Php];

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Go => ".go",
            Language::JavaScript => ".js",
            Language::Python => ".py",
            Language::Php => ".php",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Php => "PHP",
        }
    }

    /// Parse a language from an extension (with leading dot). Matching is exact.
    pub fn from_extension(extension: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|language| language.extension() == extension)
    }

    /// Resolve the language of a file name, rejecting anything outside the allow-list.
    pub fn detect(file_name: &str) -> Result<Language, AppError> {
        let extension = extension_of(file_name);
        Language::from_extension(&extension)
            .ok_or_else(|| AppError::InvalidExtension { extension, allowed: allowed_extensions() })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Comma-separated allow-list, used in error messages and help text.
pub fn allowed_extensions() -> String {
    Language::ALL.iter().map(|language| language.extension()).collect::<Vec<_>>().join(", ")
}

/// Extension of the final path component including the dot, or empty when there is none.
///
/// Everything from the last dot counts, so a bare dot-file such as `.py` has
/// the extension `.py`.
pub fn extension_of(file_name: &str) -> String {
    let name = Path::new(file_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.rfind('.').map(|dot| name[dot..].to_string()).unwrap_or_default()
}
