use super::input::{prompt_select, prompt_text};
use crate::app::api::{self, OpenFileOptions, OpenOutcome};
use crate::domain::{AppError, Viewer};

pub fn run(file: Option<String>, editor: Option<String>, plain: bool) -> Result<(), AppError> {
    let Some((file, viewer)) = resolve_inputs(file, editor, plain)? else {
        println!("❌ Open file operation cancelled.");
        return Ok(());
    };

    match api::open_file(&OpenFileOptions { file, viewer })? {
        OpenOutcome::Displayed { path, lines } => {
            println!();
            println!("File : {}", path.display());
            println!();
            for line in lines {
                println!("{}", line);
            }
            println!();
        }
        OpenOutcome::Launched { path, program } => {
            println!("✅ Opened {} with {}", path.display(), program);
        }
    }
    Ok(())
}

fn resolve_inputs(
    file: Option<String>,
    editor: Option<String>,
    plain: bool,
) -> Result<Option<(String, Viewer)>, AppError> {
    let line_numbers = !plain;

    if let Some(file) = file {
        let viewer = editor
            .map(|name| Viewer::from_name(&name, line_numbers))
            .unwrap_or(Viewer::Terminal { line_numbers });
        return Ok(Some((file, viewer)));
    }

    let Some(file) = prompt_text("File to open", api::validate_existing_file)? else {
        return Ok(None);
    };

    let viewer = match editor {
        Some(name) => Viewer::from_name(&name, line_numbers),
        None => match prompt_select("Open with", &Viewer::CHOICES)? {
            Some(index) => Viewer::from_name(Viewer::CHOICES[index], line_numbers),
            None => return Ok(None),
        },
    };

    Ok(Some((file, viewer)))
}
