//! Reconciling a composed page with an existing `index.html`.
//!
//! The policy is chosen once per run ([`IndexMode`]):
//!
//! | Mode      | No index.html      | index.html exists                        |
//! |-----------|--------------------|------------------------------------------|
//! | `use`     | write fresh page   | leave it untouched                       |
//! | `clobber` | write fresh page   | overwrite with fresh page                |
//! | `merge`   | write fresh page   | old head/body content, then new content  |
//!
//! Merging never concatenates documents directly. The existing head and body
//! content are extracted and spliced, together with the new fragments, into
//! a blank shell. If the existing page lacks a head or body section, that
//! section simply starts out empty.

use crate::compose::{ComposedPage, blank_shell, splice};
use crate::config::{INDEX_FILENAME, IndexMode};
use crate::types::IndexOutcome;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write, keep, replace, or merge `dir/index.html` according to `mode`.
pub fn reconcile(
    dir: &Path,
    page: ComposedPage,
    mode: IndexMode,
) -> Result<IndexOutcome, ReconcileError> {
    let index_path = dir.join(INDEX_FILENAME);

    if !index_path.exists() {
        write_index(&index_path, &page.into_document())?;
        return Ok(IndexOutcome::Written);
    }

    match mode {
        IndexMode::Use => Ok(IndexOutcome::Kept),
        IndexMode::Clobber => {
            write_index(&index_path, &page.into_document())?;
            Ok(IndexOutcome::Overwritten)
        }
        IndexMode::Merge => {
            let existing = fs::read_to_string(&index_path).map_err(|source| ReconcileError::Io {
                action: "read",
                path: index_path.clone(),
                source,
            })?;
            write_index(&index_path, &merge_documents(&existing, &page, &index_path))?;
            Ok(IndexOutcome::Merged)
        }
    }
}

/// Existing head/body content followed by the new fragments, in a fresh shell.
///
/// `origin` is only used for diagnostics.
pub fn merge_documents(existing: &str, page: &ComposedPage, origin: &Path) -> String {
    let old_head = extract_section(existing, "head").unwrap_or_else(|| {
        log::warn!("{}: no <head> section to merge, keeping new head only", origin.display());
        ""
    });
    let old_body = extract_section(existing, "body").unwrap_or_else(|| {
        log::warn!("{}: no <body> section to merge, keeping new body only", origin.display());
        ""
    });

    let head = format!("{old_head}{}", page.head);
    let body = format!("{old_body}{}", page.body);
    splice(&blank_shell(), &head, &body)
}

/// Text between the opening `<tag ...>` and the next `</tag>`.
///
/// The opening tag may carry attributes (`<body class="x">`); `<header>` does
/// not count as `<head>`. `None` when either marker is missing.
pub fn extract_section<'a>(document: &'a str, tag: &str) -> Option<&'a str> {
    let start = open_tag_end(document, tag)?;
    let close = format!("</{tag}>");
    let len = document[start..].find(&close)?;
    Some(&document[start..start + len])
}

/// Offset just past the `>` of the first `<tag>` or `<tag attr...>`.
fn open_tag_end(document: &str, tag: &str) -> Option<usize> {
    let open = format!("<{tag}");
    let mut from = 0;
    while let Some(offset) = document[from..].find(&open) {
        let after = from + offset + open.len();
        match document[after..].chars().next() {
            Some('>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() => {
                return document[after..].find('>').map(|end| after + end + 1);
            }
            _ => from = after,
        }
    }
    None
}

fn write_index(path: &Path, html: &str) -> Result<(), ReconcileError> {
    fs::write(path, html).map_err(|source| ReconcileError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}
