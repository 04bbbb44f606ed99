use crate::domain::{AppError, DeleteTarget, WizardEvent};

/// Port for the interactive side of the delete wizard.
///
/// Each `ask_*` call renders the current step and blocks for exactly one
/// input, which the wizard turns into at most one transition.
pub trait DeletePrompter {
    /// Ask whether the target should really be deleted.
    fn ask_confirmation(&mut self, target: &DeleteTarget) -> Result<WizardEvent, AppError>;

    /// Ask for the confirmation password. `notice` carries the reason the
    /// previous submission was rejected.
    fn ask_credential(
        &mut self,
        target: &DeleteTarget,
        notice: Option<&str>,
    ) -> Result<WizardEvent, AppError>;

    /// Announce that deletion is running. Called once, right before the
    /// blocking removal.
    fn show_processing(&mut self, target: &DeleteTarget);
}
