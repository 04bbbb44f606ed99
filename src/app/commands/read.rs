//! Read command: render a directory tree.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::ReadDirOptions;
use crate::domain::{AppError, RenderedTree, tree};
use crate::ports::{EditorLauncher, FileSystem, PathKind, TemplateStore};

/// Outcome of a read operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    pub root: PathBuf,
    pub tree: RenderedTree,
}

pub fn execute<F, T, E>(
    ctx: &AppContext<F, T, E>,
    options: &ReadDirOptions,
) -> Result<ReadOutcome, AppError>
where
    F: FileSystem,
    T: TemplateStore,
    E: EditorLauncher,
{
    let requested = Path::new(&options.path);
    match ctx.fs().kind(requested)? {
        None => return Err(AppError::NotFound(options.path.clone())),
        Some(PathKind::File) => return Err(AppError::NotADirectory(options.path.clone())),
        Some(PathKind::Directory) => {}
    }

    let root = ctx.fs().absolute(requested)?;
    let tree = tree::render(&root, options.show_hidden, |dir| ctx.fs().read_dir(dir))?;

    Ok(ReadOutcome { root, tree })
}
