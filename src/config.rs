//! Run configuration.
//!
//! fsweb has two configuration layers:
//!
//! - [`RenderConfig`]: process-wide settings chosen on the command line
//!   (theme, wrapper, search, autoscroll, breadcrumb, index mode). Built once before the
//!   walk and passed by reference into every component.
//! - The per-directory `fsweb.ini` sidecar, which only carries ignore rules.
//!   See [`crate::ignore`] for loading and [`sidecar_layout`] for the format.

use clap::ValueEnum;
use std::fmt;

/// File name of the per-directory sidecar.
pub const SIDECAR_FILENAME: &str = "fsweb.ini";

/// Name of every generated index page.
pub const INDEX_FILENAME: &str = "index.html";

/// Output subdirectory holding the search widget bundle.
pub const SEARCH_DIR: &str = "search";

/// Output subdirectory holding the autoscroll script.
pub const AUTOSCROLL_DIR: &str = "autoscroll";

/// Default output directory name.
pub const DEFAULT_OUTPUT_DIR: &str = "fsweb_generated";

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Policy for an `index.html` that already exists in a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexMode {
    /// Keep the existing page untouched.
    Use,
    /// Replace the existing page with a freshly composed one.
    Clobber,
    /// Append the composed head/body after the existing head/body content.
    Merge,
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexMode::Use => "use",
            IndexMode::Clobber => "clobber",
            IndexMode::Merge => "merge",
        };
        f.write_str(name)
    }
}

/// Settings shared by every directory visit of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub theme: Theme,
    /// Wrap page content in a centered 70%-width block.
    pub wrapper: bool,
    /// Inject the search widget and build the search manifest.
    pub search: bool,
    /// Inject the middle-click autoscroller.
    pub autoscroll: bool,
    /// Render breadcrumb navigation on non-root pages.
    pub breadcrumb: bool,
    pub index_mode: IndexMode,
}

impl RenderConfig {
    /// Plain pages: light theme, no extras.
    pub fn new(index_mode: IndexMode) -> Self {
        Self {
            theme: Theme::Light,
            wrapper: false,
            search: false,
            autoscroll: false,
            breadcrumb: false,
            index_mode,
        }
    }

    /// Output subdirectories that receive an asset bundle this run. The
    /// walker hides them at the root.
    pub fn asset_dirs(&self) -> Vec<&'static str> {
        let mut dirs = Vec::new();
        if self.search {
            dirs.push(SEARCH_DIR);
        }
        if self.autoscroll {
            dirs.push(AUTOSCROLL_DIR);
        }
        dirs
    }

    /// Whether any widget gets injected into content pages.
    pub fn injects_widgets(&self) -> bool {
        self.search || self.autoscroll
    }
}

/// Documented layout of the `fsweb.ini` sidecar.
///
/// Printed by `fsweb --ini-help`.
pub fn sidecar_layout() -> &'static str {
    r#"# fsweb.ini
# =========
# Optional. Place one in any directory of the source tree to hide entries
# from that directory's generated index.html. Rules apply only to the
# directory the file sits in; subdirectories need their own fsweb.ini.

[settings]
# Comma-separated file name patterns. Each entry is a regular expression
# matched against the start of the file name, so a plain name like
# draft.html also hides draft.html.bak.
ignore_files = draft.html, scratch

# Comma-separated directory name patterns, matched the same way. Ignored
# directories are neither listed nor descended into.
ignore_directories = private, tmp
"#
}
