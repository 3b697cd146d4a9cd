//! Output tree generation.
//!
//! [`generate`] is the whole run:
//!
//! 1. Validate the source and output paths (nothing is touched on failure).
//! 2. Remove the old output tree and copy the source tree in its place.
//! 3. Write the bundle of each enabled widget: `<output>/search/` for
//!    search, `<output>/autoscroll/` for the autoscroller.
//! 4. Walk the output tree top-down. For each directory: load its
//!    `fsweb.ini`, drop ignored entries, inject the enabled widgets into its
//!    HTML files, then compose and reconcile its `index.html`.
//! 5. With search on, write the manifest of every indexed HTML file.
//!
//! The walk only ever runs on a fresh copy. Widget injection is not
//! idempotent, so the walker is private to this module and reachable only
//! through [`generate`].
//!
//! A directory's own `index.html` is listed and searchable like any other
//! page, but never injected into: the reconciler decides what that file
//! ends up containing, and the composed page already carries the widgets.
//! Injecting as well would load every widget script twice on merged pages
//! and rewrite pages that `use` mode must keep.
//!
//! Any error aborts the run. The output tree is then left half-generated;
//! the next run starts over from step 2 anyway.

use crate::assets::{self, ManifestWriteError, SearchManifest};
use crate::compose::{compose_index, splice};
use crate::config::{AUTOSCROLL_DIR, INDEX_FILENAME, RenderConfig, SEARCH_DIR};
use crate::ignore::{self, IgnoreError};
use crate::paths::{join_relative, relativize};
use crate::reconcile::{self, ReconcileError};
use crate::render;
use crate::types::{DirectoryReport, DirectoryVisit, WalkReport};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("source directory not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error(
        "output {} overlaps source {}; pick an output outside the source tree",
        output_dir.display(),
        source_dir.display()
    )]
    OverlappingPaths {
        source_dir: PathBuf,
        output_dir: PathBuf,
    },
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: file name is not valid UTF-8", .0.display())]
    NonUtf8Name(PathBuf),
    #[error("failed to copy source tree: {0}")]
    Copy(#[from] walkdir::Error),
    #[error(transparent)]
    Ignore(#[from] IgnoreError),
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
    #[error("failed to write search manifest: {0}")]
    Manifest(#[from] ManifestWriteError),
}

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> WalkError {
    let path = path.to_path_buf();
    move |source| WalkError::Io {
        action,
        path,
        source,
    }
}

/// Regenerate `output` from `source` and index every directory in it.
pub fn generate(
    source: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<WalkReport, WalkError> {
    check_paths(source, output)?;

    recreate_output(source, output)?;

    let search_dir = output.join(SEARCH_DIR);
    if config.search {
        assets::write_bundle(&search_dir, assets::SEARCH_BUNDLE)
            .map_err(io_error("write", &search_dir))?;
    }
    if config.autoscroll {
        let autoscroll_dir = output.join(AUTOSCROLL_DIR);
        assets::write_bundle(&autoscroll_dir, assets::AUTOSCROLL_BUNDLE)
            .map_err(io_error("write", &autoscroll_dir))?;
    }

    let mut walker = Walker::new(output, config);
    walker.visit(output, true)?;

    let Walker {
        mut report,
        manifest,
        ..
    } = walker;

    if config.search {
        if manifest.is_empty() {
            log::warn!("search is on but no HTML files were indexed");
        }
        manifest.write(&search_dir)?;
        report.search_entries = Some(manifest.len());
    }

    Ok(report)
}

/// Reject a missing source and any output that would clobber or nest in it.
fn check_paths(source: &Path, output: &Path) -> Result<(), WalkError> {
    if !source.is_dir() {
        return Err(WalkError::SourceMissing(source.to_path_buf()));
    }
    let source_abs = resolve(source).map_err(io_error("resolve", source))?;
    let output_abs = resolve(output).map_err(io_error("resolve", output))?;

    if output_abs.starts_with(&source_abs) || source_abs.starts_with(&output_abs) {
        return Err(WalkError::OverlappingPaths {
            source_dir: source.to_path_buf(),
            output_dir: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonical form of `path`, which need not exist yet: the deepest existing
/// ancestor is canonicalized and the missing components appended.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

fn recreate_output(source: &Path, output: &Path) -> Result<(), WalkError> {
    if output.is_dir() {
        fs::remove_dir_all(output).map_err(io_error("remove", output))?;
    } else if output.exists() {
        fs::remove_file(output).map_err(io_error("remove", output))?;
    }
    copy_tree(source, output)
}

/// Recursively copy `source` to `output`, following symlinks so the output
/// is a plain tree.
fn copy_tree(source: &Path, output: &Path) -> Result<(), WalkError> {
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = output.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error("create", &target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_error("copy", entry.path()))?;
        }
    }
    log::debug!("copied {} to {}", source.display(), output.display());
    Ok(())
}

/// Pre-order traversal state. Only the manifest and the report outlive a
/// single directory visit.
struct Walker<'a> {
    root: String,
    config: &'a RenderConfig,
    manifest: SearchManifest,
    report: WalkReport,
}

impl<'a> Walker<'a> {
    fn new(root: &Path, config: &'a RenderConfig) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
            config,
            manifest: SearchManifest::default(),
            report: WalkReport::default(),
        }
    }

    fn visit(&mut self, dir: &Path, is_root: bool) -> Result<(), WalkError> {
        let (mut directories, files) = list_children(dir)?;

        if is_root {
            let asset_dirs = self.config.asset_dirs();
            directories.retain(|d| !asset_dirs.iter().any(|a| d.as_str() == *a));
        }

        let rules = ignore::load_ignore_rules(dir)?;
        if !rules.is_empty() {
            log::debug!("{}: applying ignore rules", dir.display());
        }
        let directories = rules.filter_directories(&directories);
        let html_files: Vec<String> = rules
            .filter_files(&files)
            .into_iter()
            .filter(|f| f.ends_with(".html"))
            .collect();

        let relative_path = relativize(&dir.to_string_lossy(), &self.root)
            .replace(std::path::MAIN_SEPARATOR, "/");
        log::debug!(
            "visiting '{}': {} directories, {} html files",
            relative_path,
            directories.len(),
            html_files.len()
        );

        if self.config.injects_widgets() {
            for file in html_files.iter().filter(|f| *f != INDEX_FILENAME) {
                inject_widgets(&dir.join(file), self.config)?;
            }
        }

        let visit = DirectoryVisit {
            path: dir.to_path_buf(),
            relative_path,
            directories,
            files: html_files,
            is_root,
        };

        let page = compose_index(&visit, self.config);
        let outcome = reconcile::reconcile(dir, page, self.config.index_mode)?;

        if self.config.search {
            for file in &visit.files {
                self.manifest.push(join_relative(&visit.relative_path, file));
            }
        }

        self.report.directories.push(DirectoryReport {
            relative_path: visit.relative_path.clone(),
            display_name: visit.display_name(),
            directory_count: visit.directories.len(),
            file_count: visit.files.len(),
            outcome,
        });

        for child in &visit.directories {
            self.visit(&dir.join(child), false)?;
        }
        Ok(())
    }
}

/// Immediate subdirectory and file names of `dir`, each sorted.
fn list_children(dir: &Path) -> Result<(Vec<String>, Vec<String>), WalkError> {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(io_error("read", dir))? {
        let entry = entry.map_err(io_error("read", dir))?;
        let Ok(name) = entry.file_name().into_string() else {
            return Err(WalkError::NonUtf8Name(entry.path()));
        };
        if entry.path().is_dir() {
            directories.push(name);
        } else {
            files.push(name);
        }
    }

    directories.sort();
    files.sort();
    Ok((directories, files))
}

/// Add the enabled widgets before the file's own `</head>` and `</body>`.
fn inject_widgets(path: &Path, config: &RenderConfig) -> Result<(), WalkError> {
    let html = fs::read_to_string(path).map_err(io_error("read", path))?;
    let injected = splice(
        &html,
        &render::widgets_head(config).into_string(),
        &render::widgets_body(config).into_string(),
    );
    fs::write(path, injected).map_err(io_error("write", path))
}
