use crate::app::api::{self, ReadDirOptions};
use crate::domain::AppError;

pub fn run(path: String, show_hidden: bool) -> Result<(), AppError> {
    let outcome = api::read_dir(&ReadDirOptions { path, show_hidden })?;

    println!("absolute path {}", outcome.root.display());
    for line in &outcome.tree.lines {
        println!("{}", line);
    }
    println!();
    println!(
        "{} {}, {} {}",
        outcome.tree.directories,
        plural(outcome.tree.directories, "directory", "directories"),
        outcome.tree.files,
        plural(outcome.tree.files, "file", "files"),
    );
    Ok(())
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
