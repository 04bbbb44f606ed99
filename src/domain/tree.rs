//! Directory tree ordering and rendering.
//!
//! Rendering is independent of the filesystem: callers supply a closure that
//! reads the children of a directory, so the walk can be driven by the real
//! filesystem or by fixtures in tests.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use super::AppError;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_PREFIX: &str = "│   ";
const SPACE_PREFIX: &str = "    ";

/// One entry produced by a single directory read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_dir: bool,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self { name: name.into(), is_dir }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Rendered tree plus counters for the summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedTree {
    pub lines: Vec<String>,
    pub directories: usize,
    pub files: usize,
}

impl RenderedTree {
    /// Total number of entries rendered (error lines excluded).
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }
}

/// Directories first, then files; byte-wise name order within each group.
pub fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name))
}

/// Drop hidden entries unless requested, then sort.
pub fn arrange(entries: Vec<TreeEntry>, show_hidden: bool) -> Vec<TreeEntry> {
    let mut kept: Vec<TreeEntry> =
        entries.into_iter().filter(|entry| show_hidden || !entry.is_hidden()).collect();
    kept.sort_by(compare_entries);
    kept
}

/// Render the tree below `root`.
///
/// A failure to read `root` itself is returned. Failures below the root are
/// rendered inline as `[Error: ...]` and the walk moves on to the next sibling.
pub fn render<F>(root: &Path, show_hidden: bool, mut read_children: F) -> Result<RenderedTree, AppError>
where
    F: FnMut(&Path) -> Result<Vec<TreeEntry>, AppError>,
{
    let mut tree = RenderedTree::default();
    let entries = arrange(read_children(root)?, show_hidden);
    render_level(root.to_path_buf(), entries, "", show_hidden, &mut read_children, &mut tree);
    Ok(tree)
}

fn render_level<F>(
    dir: PathBuf,
    entries: Vec<TreeEntry>,
    prefix: &str,
    show_hidden: bool,
    read_children: &mut F,
    tree: &mut RenderedTree,
) where
    F: FnMut(&Path) -> Result<Vec<TreeEntry>, AppError>,
{
    let count = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let (connector, child_prefix) = if is_last {
            (LAST_BRANCH, format!("{prefix}{SPACE_PREFIX}"))
        } else {
            (BRANCH, format!("{prefix}{PIPE_PREFIX}"))
        };

        if !entry.is_dir {
            tree.files += 1;
            tree.lines.push(format!("{prefix}{connector}{}", entry.name));
            continue;
        }

        tree.directories += 1;
        tree.lines.push(format!("{prefix}{connector}{}/", entry.name));

        let child_dir = dir.join(&entry.name);
        match read_children(&child_dir) {
            Ok(children) => {
                let children = arrange(children, show_hidden);
                render_level(child_dir, children, &child_prefix, show_hidden, read_children, tree);
            }
            Err(err) => tree.lines.push(format!("{child_prefix}{BRANCH}[Error: {err}]")),
        }
    }
}
