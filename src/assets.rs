//! Widget bundles and the generated search manifest.
//!
//! The widgets' scripts and stylesheets are compiled into the binary with
//! `include_str!`, so an installed `fsweb` needs no data directory. Each
//! enabled widget's bundle is written to its own output subdirectory before
//! the walk, and the search manifest script is added after it:
//!
//! ```text
//! search/
//! ├── fuzzy.js          # matcher
//! ├── on_select.js      # navigation on selection
//! ├── search.js         # modal behaviour
//! ├── search.css
//! ├── search-dark.css
//! └── search_list.js    # generated: var search_list = [...];
//! autoscroll/
//! ├── autoscroller.js   # setup_autoscroller()
//! └── autoscroll.css
//! ```

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the generated manifest script inside the search directory.
pub const MANIFEST_FILENAME: &str = "search_list.js";

/// Global the manifest script assigns; `search.js` reads it.
pub const MANIFEST_VARIABLE: &str = "search_list";

/// Fixed widget files as `(file name, contents)`.
pub const SEARCH_BUNDLE: &[(&str, &str)] = &[
    ("fuzzy.js", include_str!("../static/search/fuzzy.js")),
    ("on_select.js", include_str!("../static/search/on_select.js")),
    ("search.js", include_str!("../static/search/search.js")),
    ("search.css", include_str!("../static/search/search.css")),
    ("search-dark.css", include_str!("../static/search/search-dark.css")),
];

/// Autoscroller files as `(file name, contents)`.
pub const AUTOSCROLL_BUNDLE: &[(&str, &str)] = &[
    ("autoscroller.js", include_str!("../static/autoscroll/autoscroller.js")),
    ("autoscroll.css", include_str!("../static/autoscroll/autoscroll.css")),
];

/// Write `bundle` into `dir`, creating it if needed.
pub fn write_bundle(dir: &Path, bundle: &[(&str, &str)]) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    for (name, contents) in bundle {
        fs::write(dir.join(name), contents)?;
    }
    Ok(())
}

/// Tree-relative paths of every indexed HTML file, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchManifest {
    paths: Vec<String>,
}

impl SearchManifest {
    pub fn push(&mut self, path: String) {
        self.paths.push(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The manifest as a script assigning a JSON array to the global.
    pub fn to_script(&self) -> serde_json::Result<String> {
        let list = serde_json::to_string_pretty(self)?;
        Ok(format!("var {MANIFEST_VARIABLE} = {list};\n"))
    }

    /// Write `search_list.js` into `dir`.
    pub fn write(&self, dir: &Path) -> Result<(), ManifestWriteError> {
        let script = self.to_script()?;
        fs::write(dir.join(MANIFEST_FILENAME), script)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ManifestWriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
