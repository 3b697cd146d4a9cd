//! # fsweb
//!
//! Turns a directory of loose HTML files into a browsable site. Every
//! directory gets an `index.html` linking its subdirectories and HTML files,
//! with optional breadcrumbs, a centered content wrapper, a dark theme, a
//! keyboard-driven search widget over every indexed page, and a middle-click
//! autoscroller.
//!
//! # Pipeline
//!
//! ```text
//! source/  ──copy──▶  output/  ──walk──▶  output/**/index.html
//!                                  │
//!                                  └──▶  output/search/search_list.js
//! ```
//!
//! The source tree is never written. Each run deletes the output tree,
//! copies the source over, and indexes the copy from scratch; there is no
//! incremental mode.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | The run: copy, pre-order walk, widget injection, manifest |
//! | [`ignore`] | Per-directory `fsweb.ini` ignore rules |
//! | [`reconcile`] | `use` / `clobber` / `merge` against an existing `index.html` |
//! | [`compose`] | Index page head/body, document shell, marker splicing |
//! | [`render`] | Pure HTML fragments: lists, breadcrumb, widgets |
//! | [`paths`] | Tree-relative path helpers |
//! | [`assets`] | Embedded widget bundles and the search manifest script |
//! | [`config`] | [`config::RenderConfig`] and file-name constants |
//! | [`types`] | Records shared by the walker, composer, and output |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## One Config Value, No Ambient State
//!
//! Every page option and the index mode are parsed once into a
//! [`config::RenderConfig`] and passed down by reference. Nothing reads the
//! working directory or global flags, so every component can be exercised
//! from a test with a temp directory.
//!
//! ## Rendering Apart From I/O
//!
//! [`render`] and [`compose`] are pure functions over names and flags.
//! [`reconcile`] and [`walk`] are the only modules that touch the disk.
//!
//! ## Marker Splicing Instead of Parsing
//!
//! Content is inserted into HTML by locating the literal `</head>` and
//! `</body>` markers. Pages that don't use those exact tags are left alone
//! rather than guessed at. Merging extracts the text between the opening
//! `<head ...>` / `<body ...>` tags and their closing markers the same way.
//!
//! ## Maud for Markup
//!
//! Fragments are built with [Maud](https://maud.lambda.xyz/), so file and
//! directory names are escaped and the markup is checked at compile time.

pub mod assets;
pub mod compose;
pub mod config;
pub mod ignore;
pub mod output;
pub mod paths;
pub mod reconcile;
pub mod render;
pub mod types;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
