use std::collections::VecDeque;

use crate::domain::{AppError, DeleteTarget, WizardEvent};
use crate::ports::DeletePrompter;

/// Prompter that replays a fixed list of events, then quits.
#[derive(Debug, Default)]
pub struct ScriptedDeletePrompter {
    events: VecDeque<WizardEvent>,
    pub confirmations: usize,
    pub credential_prompts: usize,
    pub notices: Vec<Option<String>>,
    pub processing_shown: usize,
}

impl ScriptedDeletePrompter {
    pub fn new<I: IntoIterator<Item = WizardEvent>>(events: I) -> Self {
        Self { events: events.into_iter().collect(), ..Self::default() }
    }

    fn next_event(&mut self) -> WizardEvent {
        self.events.pop_front().unwrap_or(WizardEvent::Quit)
    }
}

impl DeletePrompter for ScriptedDeletePrompter {
    fn ask_confirmation(&mut self, _target: &DeleteTarget) -> Result<WizardEvent, AppError> {
        self.confirmations += 1;
        Ok(self.next_event())
    }

    fn ask_credential(
        &mut self,
        _target: &DeleteTarget,
        notice: Option<&str>,
    ) -> Result<WizardEvent, AppError> {
        self.credential_prompts += 1;
        self.notices.push(notice.map(str::to_string));
        Ok(self.next_event())
    }

    fn show_processing(&mut self, _target: &DeleteTarget) {
        self.processing_shown += 1;
    }
}
