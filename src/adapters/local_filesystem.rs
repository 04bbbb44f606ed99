use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TreeEntry};
use crate::ports::{FileSystem, PathKind};

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Write the full content into a freshly created file. A failed write removes
/// the file again so no partial file is left behind.
fn write_or_discard<W: Write>(mut file: W, path: &Path, content: &str) -> Result<(), AppError> {
    let written = file.write_all(content.as_bytes()).and_then(|_| file.flush());
    drop(file);
    if let Err(err) = written {
        let _ = fs::remove_file(path);
        return Err(AppError::from(err));
    }
    Ok(())
}

/// Split raw bytes into lines, dropping `\n` / `\r\n` terminators.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
fn decode_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>, AppError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
}

impl FileSystem for LocalFileSystem {
    fn absolute(&self, path: &Path) -> Result<PathBuf, AppError> {
        std::path::absolute(path).map_err(|err| AppError::AccessError {
            path: display(path),
            details: err.to_string(),
        })
    }

    fn kind(&self, path: &Path) -> Result<Option<PathKind>, AppError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(PathKind::Directory)),
            Ok(_) => Ok(Some(PathKind::File)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::AccessError { path: display(path), details: err.to_string() }),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn create_new(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let file = OpenOptions::new().write(true).create_new(true).open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::AlreadyExists {
                AppError::AlreadyExists(display(path))
            } else {
                AppError::from(err)
            }
        })?;
        write_or_discard(file, path, content)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let file = fs::File::open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::NotFound(display(path))
            } else {
                AppError::from(err)
            }
        })?;
        decode_lines(BufReader::new(file))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<TreeEntry>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(TreeEntry::new(entry.file_name().to_string_lossy(), is_dir));
        }
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path)
            .map_err(|err| AppError::DeletionFailed { path: display(path), details: err.to_string() })
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_dir_all(path)
            .map_err(|err| AppError::DeletionFailed { path: display(path), details: err.to_string() })
    }
}
