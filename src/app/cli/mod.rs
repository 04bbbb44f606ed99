//! CLI Adapter.

mod create;
mod delete;
mod input;
mod open;
mod read;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fops")]
#[command(version)]
#[command(
    about = "Create templated source files, view files, list directory trees, and delete paths",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new file for a given programming language (go, js, py, php)
    #[clap(visible_alias = "c")]
    Create {
        /// The file name to create; prompted for when omitted
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Open a file in the terminal or an external editor
    #[clap(visible_alias = "o")]
    Open {
        /// File to open; prompted for when omitted
        #[arg(short, long)]
        file: Option<String>,
        /// Editor to launch instead of printing (e.g. code, vim)
        #[arg(short, long)]
        editor: Option<String>,
        /// Print without line numbers
        #[arg(long, conflicts_with = "editor")]
        plain: bool,
    },
    /// Delete an existing file or directory after confirmation
    #[clap(visible_alias = "d")]
    Delete {
        /// Path to delete; prompted for when omitted
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Read a directory and list its content as a tree
    #[clap(visible_alias = "r")]
    Read {
        /// Directory to list
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Show hidden files and directories
        #[arg(short, long)]
        all: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Create { file } => create::run(file),
        Commands::Open { file, editor, plain } => open::run(file, editor, plain),
        Commands::Delete { path } => delete::run(path),
        Commands::Read { path, all } => read::run(path, all),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
