//! fops: create templated source files, view files, list directory trees, and
//! delete paths behind a confirmation wizard.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CreateOptions, CreateOutcome, DeleteOptions, DeleteOutcome, OpenFileOptions, OpenOutcome,
    ReadDirOptions, ReadOutcome, create_file, delete_path, delete_path_with, open_file, read_dir,
};
pub use domain::{AppError, Language, Viewer};
