//! Per-directory ignore rules.
//!
//! Any directory may carry an `fsweb.ini` sidecar listing names that should
//! not appear in that directory's index page:
//!
//! ```ini
//! [settings]
//! ignore_files = draft.html, notes
//! ignore_directories = private
//! ```
//!
//! Rules are loaded fresh for every directory and are not inherited: a
//! sidecar in `docs/` says nothing about `docs/api/`.
//!
//! ## Matching
//!
//! Each entry is a regular expression anchored at the start of the candidate
//! name. `notes` therefore hides `notes.html` and `notes-old.html`, and
//! `.*\.tmp` hides anything containing `.tmp`. An entry without
//! metacharacters behaves like a name prefix.
//!
//! ## Errors
//!
//! A missing sidecar means "ignore nothing". A sidecar that exists but cannot
//! be parsed, or that holds an invalid pattern, fails the whole run; a
//! half-read rule set is never used.

use crate::config::SIDECAR_FILENAME;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_SECTION: &str = "settings";
const IGNORE_FILES_KEY: &str = "ignore_files";
const IGNORE_DIRECTORIES_KEY: &str = "ignore_directories";

#[derive(Error, Debug)]
pub enum IgnoreError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("{}: invalid ignore pattern '{pattern}': {source}", path.display())]
    Pattern {
        path: PathBuf,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled ignore patterns for one directory.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    files: Vec<Regex>,
    directories: Vec<Regex>,
}

impl IgnoreRules {
    /// Compile raw entries into prefix-anchored patterns.
    ///
    /// `origin` is only used for error messages.
    pub fn from_patterns(
        files: &[String],
        directories: &[String],
        origin: &Path,
    ) -> Result<Self, IgnoreError> {
        Ok(Self {
            files: compile_all(files, origin)?,
            directories: compile_all(directories, origin)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    pub fn ignores_file(&self, name: &str) -> bool {
        self.files.iter().any(|p| p.is_match(name))
    }

    pub fn ignores_directory(&self, name: &str) -> bool {
        self.directories.iter().any(|p| p.is_match(name))
    }

    /// Files that survive the rules, in input order.
    pub fn filter_files(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|n| !self.ignores_file(n))
            .cloned()
            .collect()
    }

    /// Directories that survive the rules, in input order.
    pub fn filter_directories(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|n| !self.ignores_directory(n))
            .cloned()
            .collect()
    }
}

fn compile_all(entries: &[String], origin: &Path) -> Result<Vec<Regex>, IgnoreError> {
    entries
        .iter()
        .map(|entry| {
            // `\A(?:…)` gives the same start-anchored semantics as a
            // match-at-position-zero without letting alternations escape.
            Regex::new(&format!(r"\A(?:{entry})")).map_err(|source| IgnoreError::Pattern {
                path: origin.to_path_buf(),
                pattern: entry.clone(),
                source,
            })
        })
        .collect()
}

/// Load the rules for `dir` from its `fsweb.ini`, if any.
pub fn load_ignore_rules(dir: &Path) -> Result<IgnoreRules, IgnoreError> {
    let path = dir.join(SIDECAR_FILENAME);
    if !path.is_file() {
        return Ok(IgnoreRules::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| IgnoreError::Io {
        path: path.clone(),
        source,
    })?;
    parse_sidecar(&content, &path)
}

/// Parse sidecar text. `path` is used for error messages only.
pub fn parse_sidecar(content: &str, path: &Path) -> Result<IgnoreRules, IgnoreError> {
    let parse_error = |line: usize, message: String| IgnoreError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut sections_seen: HashSet<String> = HashSet::new();
    let mut keys_seen: HashSet<String> = HashSet::new();
    let mut section: Option<String> = None;
    // Value currently open for continuation lines: (key, accumulated value).
    let mut current: Option<(String, String)> = None;
    let mut settings: Vec<(String, String)> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let indented = raw.starts_with([' ', '\t']);
        if indented && let Some((_, value)) = current.as_mut() {
            value.push('\n');
            value.push_str(trimmed);
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| parse_error(line_no, "unterminated section header".into()))?
                .trim()
                .to_string();
            if !sections_seen.insert(name.clone()) {
                return Err(parse_error(line_no, format!("duplicate section [{name}]")));
            }
            flush(&mut current, &section, &mut settings);
            keys_seen.clear();
            section = Some(name);
            continue;
        }

        let Some(split) = trimmed.find(['=', ':']) else {
            return Err(parse_error(
                line_no,
                format!("expected 'key = value', found '{trimmed}'"),
            ));
        };
        if section.is_none() {
            return Err(parse_error(line_no, "key outside of any section".into()));
        }
        let key = trimmed[..split].trim().to_lowercase();
        if key.is_empty() {
            return Err(parse_error(line_no, "missing key name".into()));
        }
        if !keys_seen.insert(key.clone()) {
            return Err(parse_error(line_no, format!("duplicate key '{key}'")));
        }
        flush(&mut current, &section, &mut settings);
        current = Some((key, trimmed[split + 1..].trim().to_string()));
    }
    flush(&mut current, &section, &mut settings);

    let lookup = |wanted: &str| -> Vec<String> {
        settings
            .iter()
            .find(|(k, _)| k == wanted)
            .map(|(_, v)| split_entries(v))
            .unwrap_or_default()
    };

    IgnoreRules::from_patterns(
        &lookup(IGNORE_FILES_KEY),
        &lookup(IGNORE_DIRECTORIES_KEY),
        path,
    )
}

/// Close the open key, keeping it only when it belongs to `[settings]`.
fn flush(
    current: &mut Option<(String, String)>,
    section: &Option<String>,
    settings: &mut Vec<(String, String)>,
) {
    if let Some(entry) = current.take()
        && section.as_deref() == Some(SETTINGS_SECTION)
    {
        settings.push(entry);
    }
}

/// Split a comma-separated value into trimmed, non-empty entries.
fn split_entries(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
