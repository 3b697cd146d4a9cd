//! Tree-relative path helpers.
//!
//! The walker deals in two kinds of paths: absolute locations inside the
//! output tree, and *tree-relative* paths that the generated pages and the
//! search manifest use. Everything here is pure string math with no error
//! conditions:
//!
//! - `/srv/out/docs/guide` relative to `/srv/out` → `"docs/guide"`
//! - `/srv/out/docs/guide/` → display name `"guide"`
//! - `("docs", "intro.html")` → `"docs/intro.html"`

/// Strip `output_root` from the front of `full_path`, plus any separators
/// that follow it.
///
/// Returns `full_path` unchanged when `output_root` is not a prefix.
pub fn relativize(full_path: &str, output_root: &str) -> String {
    match full_path.strip_prefix(output_root) {
        Some(rest) => rest.trim_start_matches(is_separator).to_string(),
        None => full_path.to_string(),
    }
}

/// Final component of `path`, ignoring trailing separators.
///
/// Used as the human-readable name of a directory.
pub fn last_segment(path: &str) -> String {
    path.trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Append `name` to a tree-relative directory path using `/`.
pub fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}
