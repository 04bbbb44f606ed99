//! State machine for the guarded delete flow.
//!
//! ```text
//! Confirming ──Affirm──▶ AwaitingPassword ──Submit(non-empty)──▶ Processing ──▶ Completed
//!     │                    │   ▲    │                                  └──────▶ Errored
//!     └──Decline──▶ Cancelled  └────┘ Submit("") / Back ▶ Confirming
//! ```
//!
//! `Quit` in any state ends the wizard without a transition. `Cancelled`,
//! `Completed` and `Errored` are terminal.

use std::fmt;
use std::path::{Path, PathBuf};

use super::AppError;

/// Path resolved and stat'ed before the wizard starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DeleteTarget {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        Self { path, is_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn item_type(&self) -> &'static str {
        if self.is_dir { "directory" } else { "file" }
    }
}

/// One unit of user input fed into the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Affirm,
    Decline,
    Submit(String),
    Back,
    Quit,
}

#[derive(Debug)]
pub enum WizardState {
    Confirming,
    AwaitingPassword { notice: Option<String> },
    Processing { credential: String },
    Completed { message: String },
    Cancelled { message: String },
    Errored { error: AppError },
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WizardState::Completed { .. } | WizardState::Cancelled { .. } | WizardState::Errored { .. }
        )
    }

    /// Apply one input event. `None` means the wizard stops here.
    ///
    /// Events that do not apply to the current state leave it unchanged.
    pub fn next(self, event: WizardEvent) -> Option<WizardState> {
        if event == WizardEvent::Quit || self.is_terminal() {
            return None;
        }

        let state = match (self, event) {
            (WizardState::Confirming, WizardEvent::Affirm) => {
                WizardState::AwaitingPassword { notice: None }
            }
            (WizardState::Confirming, WizardEvent::Decline) => {
                WizardState::Cancelled { message: "Operation cancelled by user.".to_string() }
            }
            (WizardState::AwaitingPassword { .. }, WizardEvent::Submit(credential)) => {
                if credential.is_empty() {
                    WizardState::AwaitingPassword {
                        notice: Some("Password cannot be empty".to_string()),
                    }
                } else {
                    WizardState::Processing { credential }
                }
            }
            (WizardState::AwaitingPassword { .. }, WizardEvent::Back) => WizardState::Confirming,
            (state, _) => state,
        };
        Some(state)
    }

    /// State reached when `Processing` finishes with the given deletion result.
    pub fn after_processing(result: Result<String, AppError>) -> WizardState {
        match result {
            Ok(message) => WizardState::Completed { message },
            Err(error) => WizardState::Errored { error },
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardState::Confirming => "confirming",
            WizardState::AwaitingPassword { .. } => "awaiting-password",
            WizardState::Processing { .. } => "processing",
            WizardState::Completed { .. } => "completed",
            WizardState::Cancelled { .. } => "cancelled",
            WizardState::Errored { .. } => "errored",
        };
        f.write_str(label)
    }
}

/// Credential gate for deletion.
///
/// This is a confirmation step only: any non-empty value is accepted and
/// nothing is checked against the operating system.
pub fn verify_credential(credential: &str) -> Result<(), AppError> {
    if credential.is_empty() {
        return Err(AppError::AuthenticationFailed("password cannot be empty".to_string()));
    }
    Ok(())
}
