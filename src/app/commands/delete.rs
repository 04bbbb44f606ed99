//! Delete command: guarded, irreversible removal of a file or directory.
//!
//! The target is resolved and stat'ed before any prompt is shown, so a bad
//! path never reaches the wizard. The wizard loop reads one input per step and
//! runs the removal synchronously once the credential is accepted.

use std::path::Path;

use crate::app::config::DeleteOptions;
use crate::domain::delete_wizard::verify_credential;
use crate::domain::{AppError, DeleteTarget, WizardState};
use crate::ports::{DeletePrompter, FileSystem};

/// How the wizard ended. Failures during removal are returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { message: String },
    Cancelled { message: String },
    /// User quit before reaching a terminal state.
    Aborted,
}

/// Resolve and stat the target path.
pub fn resolve_target<F: FileSystem>(fs: &F, path: &str) -> Result<DeleteTarget, AppError> {
    if path.trim().is_empty() {
        return Err(AppError::invalid_input("Path cannot be empty"));
    }

    let absolute = fs.absolute(Path::new(path))?;
    match fs.kind(&absolute)? {
        Some(kind) => Ok(DeleteTarget::new(absolute, kind.is_dir())),
        None => Err(AppError::NotFound(absolute.display().to_string())),
    }
}

pub fn execute<F, P>(
    fs: &F,
    prompter: &mut P,
    options: &DeleteOptions,
) -> Result<DeleteOutcome, AppError>
where
    F: FileSystem,
    P: DeletePrompter,
{
    let target = resolve_target(fs, &options.path)?;
    run_wizard(fs, prompter, &target)
}

/// Drive the wizard until it reaches a terminal state or the user quits.
pub fn run_wizard<F, P>(
    fs: &F,
    prompter: &mut P,
    target: &DeleteTarget,
) -> Result<DeleteOutcome, AppError>
where
    F: FileSystem,
    P: DeletePrompter,
{
    let mut state = WizardState::Confirming;

    loop {
        let (current, event) = match state {
            WizardState::Confirming => {
                let event = prompter.ask_confirmation(target)?;
                (WizardState::Confirming, event)
            }
            WizardState::AwaitingPassword { notice } => {
                let event = prompter.ask_credential(target, notice.as_deref())?;
                (WizardState::AwaitingPassword { notice }, event)
            }
            WizardState::Processing { credential } => {
                prompter.show_processing(target);
                state = WizardState::after_processing(remove_target(fs, target, &credential));
                continue;
            }
            WizardState::Completed { message } => return Ok(DeleteOutcome::Deleted { message }),
            WizardState::Cancelled { message } => return Ok(DeleteOutcome::Cancelled { message }),
            WizardState::Errored { error } => return Err(error),
        };

        match current.next(event) {
            Some(next) => state = next,
            None => return Ok(DeleteOutcome::Aborted),
        }
    }
}

/// Check the credential, re-stat the target and remove it.
fn remove_target<F: FileSystem>(
    fs: &F,
    target: &DeleteTarget,
    credential: &str,
) -> Result<String, AppError> {
    verify_credential(credential)?;

    let kind = fs.kind(target.path())?.ok_or_else(|| AppError::AccessError {
        path: target.path().display().to_string(),
        details: "path no longer exists".to_string(),
    })?;

    if kind.is_dir() {
        fs.remove_dir_all(target.path())?;
    } else {
        fs.remove_file(target.path())?;
    }

    let item_type = if kind.is_dir() { "directory" } else { "file" };
    Ok(format!("Successfully deleted {}: {}", item_type, target.path().display()))
}
