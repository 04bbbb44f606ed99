//! Open command: print a file or hand it to an external editor.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::OpenFileOptions;
use crate::domain::viewer::format_line;
use crate::domain::{AppError, Viewer};
use crate::ports::{EditorLauncher, FileSystem, PathKind, TemplateStore};

/// Outcome of an open operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// File content formatted for the terminal.
    Displayed { path: PathBuf, lines: Vec<String> },
    /// File handed to an external program.
    Launched { path: PathBuf, program: String },
}

impl OpenOutcome {
    pub fn path(&self) -> &Path {
        match self {
            OpenOutcome::Displayed { path, .. } | OpenOutcome::Launched { path, .. } => path,
        }
    }
}

/// Check that a file name points at an existing regular file.
pub fn validate<F: FileSystem>(fs: &F, file: &str) -> Result<(), AppError> {
    if file.trim().is_empty() {
        return Err(AppError::invalid_input("File name cannot be empty"));
    }

    match fs.kind(Path::new(file))? {
        None => Err(AppError::NotFound(file.to_string())),
        Some(PathKind::Directory) => {
            Err(AppError::invalid_input(format!("'{}' is a directory, not a file", file)))
        }
        Some(PathKind::File) => Ok(()),
    }
}

pub fn execute<F, T, E>(
    ctx: &AppContext<F, T, E>,
    options: &OpenFileOptions,
) -> Result<OpenOutcome, AppError>
where
    F: FileSystem,
    T: TemplateStore,
    E: EditorLauncher,
{
    validate(ctx.fs(), &options.file)?;
    let path = ctx.fs().absolute(Path::new(&options.file))?;

    match &options.viewer {
        Viewer::Terminal { line_numbers } => {
            let lines = ctx
                .fs()
                .read_lines(&path)?
                .iter()
                .enumerate()
                .map(|(index, line)| format_line(index + 1, line, *line_numbers))
                .collect();
            Ok(OpenOutcome::Displayed { path, lines })
        }
        Viewer::Editor { program, wait } => {
            ctx.launcher().launch(program, &path, *wait)?;
            Ok(OpenOutcome::Launched { path, program: program.clone() })
        }
    }
}
