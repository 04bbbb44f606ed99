use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::EditorLauncher;

/// Launches editors as child processes found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEditorLauncher;

impl ProcessEditorLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl EditorLauncher for ProcessEditorLauncher {
    fn launch(&self, program: &str, path: &Path, wait: bool) -> Result<(), AppError> {
        let mut command = Command::new(program);
        command.arg(path);

        let launch_failed =
            |details: String| AppError::LaunchFailed { program: program.to_string(), details };

        if !wait {
            command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
            command.spawn().map_err(|e| launch_failed(e.to_string()))?;
            return Ok(());
        }

        let status = command.status().map_err(|e| launch_failed(e.to_string()))?;
        if !status.success() {
            return Err(launch_failed(format!("exited with {}", status)));
        }
        Ok(())
    }
}
