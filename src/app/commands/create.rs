//! Create command: write a templated source file for a supported language.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::CreateOptions;
use crate::domain::{AppError, Language};
use crate::ports::{EditorLauncher, FileSystem, TemplateStore};

/// Outcome of a create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub path: PathBuf,
    pub language: Language,
    pub wrote_template: bool,
}

/// Check a file name before creating it: non-empty, allowed extension, not present yet.
pub fn validate<F: FileSystem>(fs: &F, file: &str) -> Result<Language, AppError> {
    if file.trim().is_empty() {
        return Err(AppError::invalid_input("File name cannot be empty"));
    }

    let language = Language::detect(file)?;

    if fs.kind(Path::new(file))?.is_some() {
        return Err(AppError::AlreadyExists(file.to_string()));
    }

    Ok(language)
}

pub fn execute<F, T, E>(
    ctx: &AppContext<F, T, E>,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    F: FileSystem,
    T: TemplateStore,
    E: EditorLauncher,
{
    let language = validate(ctx.fs(), &options.file)?;
    let path = Path::new(&options.file);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && ctx.fs().kind(parent)?.is_none()
    {
        ctx.fs().create_dir_all(parent)?;
    }

    let template = ctx.templates().template(language).unwrap_or_default();
    ctx.fs().create_new(path, &template)?;

    Ok(CreateOutcome {
        path: ctx.fs().absolute(path)?,
        language,
        wrote_template: !template.is_empty(),
    })
}
