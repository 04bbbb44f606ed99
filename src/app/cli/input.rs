use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::AppError;

/// Read a line, re-prompting until `validate` accepts it. `None` on interrupt.
pub(super) fn prompt_text<V>(prompt: &str, mut validate: V) -> Result<Option<String>, AppError>
where
    V: FnMut(&str) -> Result<(), AppError>,
{
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            validate(input).map_err(|err| format!("{}. Please try again!", err))
        })
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read input: {}", err))),
    }
}

/// Pick one item from a list. `None` when the user backs out.
pub(super) fn prompt_select(prompt: &str, items: &[&str]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select option: {}", err)))
}
