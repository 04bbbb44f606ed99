use super::input::prompt_text;
use crate::app::api::{self, DeleteOptions, DeleteOutcome};
use crate::domain::AppError;

pub fn run(path: Option<String>) -> Result<(), AppError> {
    let path = match path {
        Some(value) => value,
        None => match prompt_text(
            "Enter directory or file name to delete",
            api::validate_existing_path,
        )? {
            Some(value) => value,
            None => {
                println!("❌ Delete operation cancelled.");
                return Ok(());
            }
        },
    };

    println!("⚠️ You are about to delete {}", path);
    match api::delete_path(&DeleteOptions { path })? {
        DeleteOutcome::Deleted { message } => println!("✅ {}", message),
        DeleteOutcome::Cancelled { message } => println!("❌ {}", message),
        DeleteOutcome::Aborted => println!("ℹ️ Delete operation aborted. Nothing was removed."),
    }
    Ok(())
}
