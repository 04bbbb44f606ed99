//! Test doubles for the ports.

mod recording_launcher;
mod scripted_prompter;

pub use failing_fs::FailingRemovalFs;
pub use recording_launcher::RecordingLauncher;
pub use scripted_prompter::ScriptedDeletePrompter;

use crate::adapters::{EmbeddedTemplateStore, LocalFileSystem};
use crate::app::AppContext;

/// Context over the real filesystem with a recording launcher.
pub type TestContext = AppContext<LocalFileSystem, EmbeddedTemplateStore, RecordingLauncher>;

pub fn test_context() -> (assert_fs::TempDir, TestContext) {
    let temp = assert_fs::TempDir::new().expect("failed to create temp dir");
    let ctx = AppContext::new(
        LocalFileSystem::new(),
        EmbeddedTemplateStore::new(),
        RecordingLauncher::new(),
    );
    (temp, ctx)
}
