use super::input::prompt_text;
use crate::app::api::{self, CreateOptions};
use crate::domain::AppError;

pub fn run(file: Option<String>) -> Result<(), AppError> {
    let file = match file {
        Some(value) => value,
        None => match prompt_text("File name to create (e.g. main.go)", |value| {
            api::validate_new_file(value).map(|_| ())
        })? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    println!("Generating file {} ...", file);
    let outcome = api::create_file(&CreateOptions { file })?;
    println!("✅ Created {} file at {}", outcome.language, outcome.path.display());
    Ok(())
}
