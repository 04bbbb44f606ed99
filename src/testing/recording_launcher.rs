use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::EditorLauncher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub program: String,
    pub path: PathBuf,
    pub wait: bool,
}

/// Launcher that records calls instead of spawning processes.
#[derive(Default)]
pub struct RecordingLauncher {
    launches: RefCell<Vec<Launch>>,
    fail_next: RefCell<bool>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self) {
        *self.fail_next.borrow_mut() = true;
    }

    pub fn launches(&self) -> Vec<Launch> {
        self.launches.borrow().clone()
    }
}

impl EditorLauncher for RecordingLauncher {
    fn launch(&self, program: &str, path: &Path, wait: bool) -> Result<(), AppError> {
        if self.fail_next.replace(false) {
            return Err(AppError::LaunchFailed {
                program: program.to_string(),
                details: "mock launch failure".to_string(),
            });
        }
        self.launches.borrow_mut().push(Launch {
            program: program.to_string(),
            path: path.to_path_buf(),
            wait,
        });
        Ok(())
    }
}
