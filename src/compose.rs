//! Index page composition.
//!
//! A page is kept as two fragments, head and body, rather than a finished
//! document. The only way to turn fragments into a document is to splice
//! them into a [`blank_shell`]; the reconciler's merge mode relies on this
//! to put an existing page's content in front of the new content.
//!
//! ## Splicing
//!
//! [`splice`] looks for the literal `</head>` and `</body>` markers and
//! inserts immediately before them. There is no HTML parser involved: pages
//! that spell those tags differently are left as they are.

use crate::config::{RenderConfig, Theme};
use crate::render;
use crate::types::DirectoryVisit;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

const DARK_STYLE: &str = "body { background-color: black; color: white; } \
                          a { color: #8ab4f8; } a:visited { color: #c58af9; }";
const WRAPPER_STYLE: &str = "width: 70%; margin: 0 auto;";

/// Head and body content of a generated index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPage {
    pub head: String,
    pub body: String,
}

impl ComposedPage {
    /// Full document: the blank shell with both fragments spliced in.
    pub fn into_document(self) -> String {
        splice(&blank_shell(), &self.head, &self.body)
    }
}

/// Document skeleton with empty head and body.
pub fn blank_shell() -> String {
    let shell: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {}
            body {}
        }
    };
    shell.into_string()
}

/// Insert `head` before the first `</head>` and `body` before the first
/// `</body>` that follows it.
///
/// A missing marker skips that insertion and leaves the document unchanged
/// there.
pub fn splice(document: &str, head: &str, body: &str) -> String {
    let with_head = insert_before(document, HEAD_CLOSE, head, 0);
    let body_from = with_head.find(HEAD_CLOSE).unwrap_or(0);
    insert_before(&with_head, BODY_CLOSE, body, body_from)
}

fn insert_before(document: &str, marker: &str, content: &str, from: usize) -> String {
    match document[from..].find(marker) {
        Some(offset) => {
            let at = from + offset;
            let mut out = String::with_capacity(document.len() + content.len());
            out.push_str(&document[..at]);
            out.push_str(content);
            out.push_str(&document[at..]);
            out
        }
        None => {
            log::warn!("no {marker} marker found, skipping insertion");
            document.to_string()
        }
    }
}

/// Build the index page for one directory.
pub fn compose_index(visit: &DirectoryVisit, config: &RenderConfig) -> ComposedPage {
    let name = visit.display_name();
    ComposedPage {
        head: compose_head(&name, config).into_string(),
        body: compose_body(visit, &name, config).into_string(),
    }
}

fn compose_head(title: &str, config: &RenderConfig) -> Markup {
    html! {
        meta charset="UTF-8";
        title { (title) }
        @if config.theme == Theme::Dark {
            style { (PreEscaped(DARK_STYLE)) }
        }
        (render::widgets_head(config))
    }
}

fn compose_body(visit: &DirectoryVisit, name: &str, config: &RenderConfig) -> Markup {
    let content = html! {
        @if config.breadcrumb && !visit.is_root {
            (render::breadcrumb(&visit.relative_path))
        }
        h1 {
            @if visit.is_root { "root: " }
            (name)
        }
        @if !visit.directories.is_empty() {
            h2 { "directories" }
            (render::directory_list(&visit.directories))
        }
        @if !visit.files.is_empty() {
            h2 { "files" }
            (render::file_list(&visit.files))
        }
    };

    html! {
        @if config.wrapper {
            div.fsweb-wrapper style=(WRAPPER_STYLE) { (content) }
        } @else {
            (content)
        }
        (render::widgets_body(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexMode;
    use crate::test_helpers::visit;

    fn plain() -> RenderConfig {
        RenderConfig::new(IndexMode::Clobber)
    }

    #[test]
    fn blank_shell_is_empty_document() {
        assert_eq!(
            blank_shell(),
            "<!DOCTYPE html><html lang=\"en\"><head></head><body></body></html>"
        );
    }

    #[test]
    fn splice_inserts_before_closing_tags() {
        let doc = splice(&blank_shell(), "<title>t</title>", "<p>hi</p>");
        assert!(doc.contains("<head><title>t</title></head>"));
        assert!(doc.contains("<body><p>hi</p></body>"));
    }

    #[test]
    fn splice_skips_missing_marker() {
        let doc = splice("<html><body></body></html>", "<title>t</title>", "<p>hi</p>");
        assert_eq!(doc, "<html><body><p>hi</p></body></html>");
    }

    #[test]
    fn splice_body_marker_inside_head_is_not_used() {
        let doc = splice(
            "<head><script>'</body>'</script></head><body></body>",
            "",
            "X",
        );
        assert_eq!(doc, "<head><script>'</body>'</script></head><body>X</body>");
    }

    #[test]
    fn document_is_complete_and_utf8() {
        let page = compose_index(&visit("/out", "", &[], &[], true), &plain());
        let doc = page.into_document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.ends_with("</body></html>"));
    }

    #[test]
    fn root_heading_is_prefixed() {
        let page = compose_index(&visit("/srv/out", "", &[], &[], true), &plain());
        assert!(page.body.contains("<h1>root: out</h1>"));
        assert!(page.head.contains("<title>out</title>"));
    }

    #[test]
    fn non_root_heading_is_plain_name() {
        let page = compose_index(&visit("/srv/out/sub", "sub", &[], &[], false), &plain());
        assert!(page.body.contains("<h1>sub</h1>"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let page = compose_index(&visit("/out/sub", "sub", &[], &[], false), &plain());
        assert!(!page.body.contains("<h2>"));
        assert!(!page.body.contains("<ul>"));
    }

    #[test]
    fn lists_follow_heading() {
        let page = compose_index(
            &visit("/out", "", &["sub"], &["x.html"], true),
            &plain(),
        );
        let h1 = page.body.find("<h1>").unwrap();
        let dirs = page.body.find("sub/index.html").unwrap();
        let files = page.body.find("href=\"x.html\">x</a>").unwrap();
        assert!(h1 < dirs && dirs < files);
    }

    #[test]
    fn light_theme_has_no_style() {
        let page = compose_index(&visit("/out", "", &[], &[], true), &plain());
        assert!(!page.head.contains("<style>"));
    }

    #[test]
    fn dark_theme_forces_colors() {
        let config = RenderConfig {
            theme: Theme::Dark,
            ..plain()
        };
        let page = compose_index(&visit("/out", "", &[], &[], true), &config);
        assert!(page.head.contains("background-color: black"));
        assert!(page.head.contains("color: white"));
    }

    #[test]
    fn wrapper_wraps_content() {
        let config = RenderConfig {
            wrapper: true,
            ..plain()
        };
        let page = compose_index(&visit("/out", "", &[], &["x.html"], true), &config);
        assert!(page.body.starts_with("<div"));
        assert!(page.body.contains("class=\"fsweb-wrapper\""));
        assert!(page.body.contains("style=\"width: 70%; margin: 0 auto;\""));
        assert!(page.body.ends_with("</ul></div>"));
    }

    #[test]
    fn breadcrumb_only_when_enabled_and_not_root() {
        let config = RenderConfig {
            breadcrumb: true,
            ..plain()
        };
        let root = compose_index(&visit("/out", "", &[], &[], true), &config);
        assert!(!root.body.contains("breadcrumb"));

        let nested = compose_index(&visit("/out/a/b", "a/b", &[], &[], false), &config);
        assert!(nested.body.contains("href=\"/a/index.html\""));

        let off = compose_index(&visit("/out/a/b", "a/b", &[], &[], false), &plain());
        assert!(!off.body.contains("breadcrumb"));
    }

    #[test]
    fn search_adds_head_and_body_fragments() {
        let config = RenderConfig {
            search: true,
            wrapper: true,
            ..plain()
        };
        let page = compose_index(&visit("/out", "", &[], &[], true), &config);
        assert!(page.head.contains("/search/search.css"));
        // The widget sits outside the wrapper.
        let wrapper_end = page.body.find("</div>").unwrap();
        let modal = page.body.find("searchModal").unwrap();
        assert!(wrapper_end < modal);
    }

    #[test]
    fn autoscroll_adds_arrow_and_setup() {
        let config = RenderConfig {
            autoscroll: true,
            ..plain()
        };
        let page = compose_index(&visit("/out", "", &[], &[], true), &config);
        assert!(page.head.contains("/autoscroll/autoscroll.css"));
        assert!(page.body.contains("id=\"autoscroll-arrow\""));
        assert!(page.body.contains("setup_autoscroller();"));
        assert!(!page.body.contains("searchModal"));
    }
}
