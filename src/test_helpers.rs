//! Shared test utilities for the fsweb test suite.
//!
//! Source trees are described inline as `(relative path, contents)` pairs
//! and materialized under a temp directory:
//!
//! ```rust
//! let tmp = TempDir::new().unwrap();
//! let source = build_tree(tmp.path(), &[("x.html", PAGE), ("sub/y.html", PAGE)]);
//! let output = tmp.path().join("out");
//! generate(&source, &output, &RenderConfig::new(IndexMode::Clobber)).unwrap();
//! assert!(read(&output, "sub/index.html").contains("y.html"));
//! ```

use crate::types::DirectoryVisit;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A well-formed content page.
pub const PAGE: &str = "<!DOCTYPE html><html><head><title>page</title></head>\
                        <body><p>content</p></body></html>";

/// An existing index page carrying a recognizable marker.
pub const PRIOR_PAGE: &str = "<!DOCTYPE html><html><head><title>prior</title></head>\
                              <body><p>PRIOR</p></body></html>";

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `files` under `base/src` and return that source root.
pub fn build_tree(base: &Path, files: &[(&str, &str)]) -> PathBuf {
    let root = base.join("src");
    fs::create_dir_all(&root).unwrap();
    for (relative, contents) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
    }
    root
}

/// Build a visit record without touching the filesystem.
pub fn visit(
    path: &str,
    relative_path: &str,
    directories: &[&str],
    files: &[&str],
    is_root: bool,
) -> DirectoryVisit {
    DirectoryVisit {
        path: PathBuf::from(path),
        relative_path: relative_path.to_string(),
        directories: directories.iter().map(|s| s.to_string()).collect(),
        files: files.iter().map(|s| s.to_string()).collect(),
        is_root,
    }
}

// =========================================================================
// Output inspection — panics with a clear message on miss
// =========================================================================

/// Read a file below `root`. Panics naming the missing path.
pub fn read(root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Every file below `root` with its bytes, keyed by relative path.
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap();
            (
                relative.to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

/// Paths declared by a generated `search_list.js`.
pub fn manifest_paths(script_path: &Path) -> Vec<String> {
    let script = fs::read_to_string(script_path).unwrap();
    let json = script
        .strip_prefix("var search_list = ")
        .and_then(|s| s.trim_end().strip_suffix(';'))
        .unwrap_or_else(|| panic!("unexpected manifest script: {script}"));
    serde_json::from_str(json).unwrap()
}
