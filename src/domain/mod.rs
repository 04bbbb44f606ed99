pub mod delete_wizard;
pub mod error;
pub mod language;
pub mod tree;
pub mod viewer;

pub use delete_wizard::{DeleteTarget, WizardEvent, WizardState};
pub use error::AppError;
pub use language::Language;
pub use tree::{RenderedTree, TreeEntry};
pub use viewer::Viewer;
