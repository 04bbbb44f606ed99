use std::io::{self, ErrorKind};

use console::{Key, Term};
use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::{AppError, DeleteTarget, WizardEvent};
use crate::ports::DeletePrompter;

/// Terminal front-end for the delete wizard.
#[derive(Debug, Default)]
pub struct DialoguerDeletePrompter {
    banner_shown: bool,
}

impl DialoguerDeletePrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn banner(&mut self, target: &DeleteTarget) {
        if self.banner_shown {
            return;
        }
        self.banner_shown = true;
        println!("Secure Delete");
        println!();
        println!("path {}: {}", target.item_type(), target.path().display());
        println!();
    }
}

fn current_user() -> Option<String> {
    std::env::var("USER").or_else(|_| std::env::var("USERNAME")).ok().filter(|u| !u.is_empty())
}

fn interrupted(err: &DialoguerError) -> bool {
    matches!(err, DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted)
}

impl DeletePrompter for DialoguerDeletePrompter {
    fn ask_confirmation(&mut self, target: &DeleteTarget) -> Result<WizardEvent, AppError> {
        self.banner(target);
        if target.is_dir {
            println!("⚠️ This is a directory! All contents will be permanently deleted.");
        }

        let answer = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete this {}?", target.item_type()))
            .default(false)
            .interact_opt();

        match answer {
            Ok(Some(true)) => Ok(WizardEvent::Affirm),
            Ok(Some(false)) => Ok(WizardEvent::Decline),
            Ok(None) => Ok(WizardEvent::Quit),
            Err(err) if interrupted(&err) => Ok(WizardEvent::Quit),
            Err(err) => Err(AppError::Prompt(format!("Failed to read confirmation: {}", err))),
        }
    }

    fn ask_credential(
        &mut self,
        target: &DeleteTarget,
        notice: Option<&str>,
    ) -> Result<WizardEvent, AppError> {
        self.banner(target);
        if let Some(notice) = notice {
            println!("❌ {}", notice);
        } else {
            println!("ℹ️ Confirmation required. The password is not checked against the system.");
            if let Some(user) = current_user() {
                println!("User: {}", user);
            }
        }

        read_credential(&Term::stderr())
            .map_err(|err| AppError::Prompt(format!("Failed to read password: {}", err)))
    }

    fn show_processing(&mut self, target: &DeleteTarget) {
        println!("Deleting {}...", target.item_type());
    }
}

/// What one key press does to the credential prompt.
#[derive(Debug, PartialEq, Eq)]
enum KeyStep {
    Echo,
    Erase,
    Ignore,
    Finish(WizardEvent),
}

/// Masked line editor behind the credential prompt. Enter submits, Esc goes
/// back to the confirmation step.
#[derive(Debug, Default)]
struct CredentialInput {
    value: String,
}

impl CredentialInput {
    fn feed(&mut self, key: Key) -> KeyStep {
        match key {
            Key::Enter => KeyStep::Finish(WizardEvent::Submit(std::mem::take(&mut self.value))),
            Key::Escape => KeyStep::Finish(WizardEvent::Back),
            Key::Backspace => match self.value.pop() {
                Some(_) => KeyStep::Erase,
                None => KeyStep::Ignore,
            },
            Key::Char(c) if !c.is_control() => {
                self.value.push(c);
                KeyStep::Echo
            }
            _ => KeyStep::Ignore,
        }
    }
}

fn read_credential(term: &Term) -> io::Result<WizardEvent> {
    if !term.is_term() {
        return Err(io::Error::new(ErrorKind::NotConnected, "not a terminal"));
    }

    term.write_str("Password (confirmation only, Esc to go back): ")?;
    let mut input = CredentialInput::default();
    loop {
        let key = match term.read_key() {
            Ok(key) => key,
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                term.write_line("")?;
                return Ok(WizardEvent::Quit);
            }
            Err(err) => return Err(err),
        };

        match input.feed(key) {
            KeyStep::Echo => term.write_str("*")?,
            KeyStep::Erase => term.clear_chars(1)?,
            KeyStep::Ignore => {}
            KeyStep::Finish(event) => {
                term.write_line("")?;
                return Ok(event);
            }
        }
    }
}
