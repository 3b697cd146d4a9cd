//! Records shared between the walker, the page composer, and CLI output.

use std::fmt;
use std::path::PathBuf;

/// One directory as seen by the walker, after ignore rules were applied.
///
/// Lives only while that directory is being processed.
#[derive(Debug, Clone)]
pub struct DirectoryVisit {
    /// Location inside the output tree, rooted wherever `--output` points.
    pub path: PathBuf,
    /// Location relative to the output root, `/`-separated. Empty for the root.
    pub relative_path: String,
    /// Child directories to list and descend into, sorted.
    pub directories: Vec<String>,
    /// Child `.html` files to list, sorted.
    pub files: Vec<String>,
    pub is_root: bool,
}

impl DirectoryVisit {
    /// Human-readable directory name used for the title and heading.
    pub fn display_name(&self) -> String {
        crate::paths::last_segment(&self.path.to_string_lossy())
    }
}

/// What happened to a directory's `index.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// No index existed; a fresh one was written.
    Written,
    /// An existing index was left alone (`use` mode).
    Kept,
    /// An existing index was replaced (`clobber` mode).
    Overwritten,
    /// New content was appended to an existing index (`merge` mode).
    Merged,
}

impl fmt::Display for IndexOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IndexOutcome::Written => "written",
            IndexOutcome::Kept => "kept",
            IndexOutcome::Overwritten => "overwritten",
            IndexOutcome::Merged => "merged",
        };
        f.write_str(label)
    }
}

/// Summary of one processed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryReport {
    pub relative_path: String,
    pub display_name: String,
    pub directory_count: usize,
    pub file_count: usize,
    pub outcome: IndexOutcome,
}

/// Summary of a whole run, in visit (pre-order) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub directories: Vec<DirectoryReport>,
    /// Entries written to the search manifest; `None` when search is off.
    pub search_entries: Option<usize>,
}
