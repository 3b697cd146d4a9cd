//! CLI output formatting.
//!
//! The run summary is a tree of the visited directories, each line naming
//! the directory, the index page it got, and what happened to that page:
//!
//! ```text
//! root: site → index.html (written, 2 directories, 1 file)
//!     docs → docs/index.html (merged, 0 directories, 4 files)
//!     notes → notes/index.html (kept, 0 directories, 2 files)
//!
//! Generated 3 index pages (merge mode)
//! Search manifest: 7 entries
//! ```
//!
//! [`format_generate_output`] is pure and returns lines for testability;
//! [`print_generate_output`] writes them to stdout.

use crate::config::{INDEX_FILENAME, IndexMode};
use crate::paths::join_relative;
use crate::types::{DirectoryReport, IndexOutcome, WalkReport};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 file`, `2 files`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn depth(relative_path: &str) -> usize {
    relative_path.split('/').filter(|s| !s.is_empty()).count()
}

fn directory_line(dir: &DirectoryReport) -> String {
    let label = if dir.relative_path.is_empty() {
        format!("root: {}", dir.display_name)
    } else {
        dir.display_name.clone()
    };
    format!(
        "{}{} → {} ({}, {}, {})",
        indent(depth(&dir.relative_path)),
        label,
        join_relative(&dir.relative_path, INDEX_FILENAME),
        dir.outcome,
        count(dir.directory_count, "directory", "directories"),
        count(dir.file_count, "file", "files"),
    )
}

/// Format the summary of a finished run in `mode`.
pub fn format_generate_output(report: &WalkReport, mode: IndexMode) -> Vec<String> {
    let mut lines: Vec<String> = report.directories.iter().map(directory_line).collect();

    let touched = report
        .directories
        .iter()
        .filter(|d| d.outcome != IndexOutcome::Kept)
        .count();
    let kept = report.directories.len() - touched;

    lines.push(String::new());
    let generated = count(touched, "index page", "index pages");
    if kept == 0 {
        lines.push(format!("Generated {generated} ({mode} mode)"));
    } else {
        lines.push(format!("Generated {generated}, kept {kept} existing ({mode} mode)"));
    }
    if let Some(entries) = report.search_entries {
        lines.push(format!("Search manifest: {}", count(entries, "entry", "entries")));
    }
    lines
}

/// Print the run summary to stdout.
pub fn print_generate_output(report: &WalkReport, mode: IndexMode) {
    for line in format_generate_output(report, mode) {
        println!("{}", line);
    }
}
