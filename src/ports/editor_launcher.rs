use std::path::Path;

use crate::domain::AppError;

/// Port for handing a file to an external program.
pub trait EditorLauncher {
    /// Launch `program` with `path` as its sole argument.
    ///
    /// When `wait` is set the call blocks until the program exits and a
    /// non-zero exit is reported as `LaunchFailed`.
    fn launch(&self, program: &str, path: &Path, wait: bool) -> Result<(), AppError>;
}
