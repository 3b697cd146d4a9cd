//! HTML fragments for index pages.
//!
//! Every renderer here is a pure function from names and flags to a
//! [`Markup`] fragment, built with [maud](https://maud.lambda.xyz/) so that
//! file and directory names are escaped on the way in. Nothing in this
//! module touches the filesystem; [`crate::compose`] stitches the fragments
//! into a page and [`crate::reconcile`] decides how the page lands on disk.
//!
//! | Fragment | Empty input |
//! |----------|-------------|
//! | [`directory_list`] | empty string, no `<ul>` |
//! | [`file_list`] | empty string, no `<ul>` |
//! | [`breadcrumb`] | root link only (callers skip it for the root) |
//! | [`search_head`] / [`search_body`] | n/a, fixed markup |
//! | [`autoscroll_head`] / [`autoscroll_body`] | n/a, fixed markup |
//!
//! [`widgets_head`] and [`widgets_body`] bundle whichever widgets a run has
//! enabled. Generated index pages and injected content pages both use them,
//! so the two always carry the same markup.

use crate::config::{INDEX_FILENAME, RenderConfig, Theme};
use maud::{Markup, html};

/// Links to each subdirectory's generated index page.
pub fn directory_list(names: &[String]) -> Markup {
    html! {
        @if !names.is_empty() {
            ul {
                @for name in names {
                    li { a href={ (name) "/" (INDEX_FILENAME) } { (name) } }
                }
            }
        }
    }
}

/// Links to sibling HTML files, labelled without the `.html` suffix.
pub fn file_list(names: &[String]) -> Markup {
    html! {
        @if !names.is_empty() {
            ul {
                @for name in names {
                    li { a href=(name) { (link_text(name)) } }
                }
            }
        }
    }
}

/// `guide.html` → `guide`.
pub fn link_text(file_name: &str) -> &str {
    file_name.strip_suffix(".html").unwrap_or(file_name)
}

/// Ancestor chain for a tree-relative directory path.
///
/// `"a/b"` renders `~ / a / b`, linking `/index.html`, `/a/index.html` and
/// `/a/b/index.html`.
pub fn breadcrumb(relative_path: &str) -> Markup {
    let segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();

    html! {
        nav.breadcrumb {
            a href={ "/" (INDEX_FILENAME) } { "~" }
            @for (i, segment) in segments.iter().enumerate() {
                " / "
                a href={ "/" (segments[..=i].join("/")) "/" (INDEX_FILENAME) } { (segment) }
            }
        }
    }
}

/// Stylesheets for the search widget, placed inside `<head>`.
pub fn search_head(theme: Theme) -> Markup {
    html! {
        @if theme == Theme::Dark {
            link rel="stylesheet" href="/search/search-dark.css";
        }
        link rel="stylesheet" href="/search/search.css";
    }
}

/// Search modal and its scripts, placed at the end of `<body>`.
///
/// Script order matters: the matcher and the generated path list must load
/// before `search.js` wires up the modal.
pub fn search_body() -> Markup {
    html! {
        div id="searchModal" class="search-modal" {
            div class="search-content" {
                input id="searchInput" type="text" placeholder="Search pages…" autocomplete="off";
                ul id="results" {}
            }
        }
        script src="/search/fuzzy.js" {}
        script src="/search/search_list.js" {}
        script src="/search/on_select.js" {}
        script src="/search/search.js" {}
    }
}

/// Stylesheet positioning the autoscroll arrow.
pub fn autoscroll_head() -> Markup {
    html! {
        link rel="stylesheet" href="/autoscroll/autoscroll.css";
    }
}

/// Arrow element, the autoscroller script, and its setup call.
pub fn autoscroll_body() -> Markup {
    html! {
        div id="autoscroll-arrow" {}
        script src="/autoscroll/autoscroller.js" {}
        script { "setup_autoscroller();" }
    }
}

/// Head markup of every widget enabled in `config`.
pub fn widgets_head(config: &RenderConfig) -> Markup {
    html! {
        @if config.search {
            (search_head(config.theme))
        }
        @if config.autoscroll {
            (autoscroll_head())
        }
    }
}

/// Body markup of every widget enabled in `config`.
pub fn widgets_body(config: &RenderConfig) -> Markup {
    html! {
        @if config.search {
            (search_body())
        }
        @if config.autoscroll {
            (autoscroll_body())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexMode;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn directory_list_empty_is_empty_string() {
        assert_eq!(directory_list(&[]).into_string(), "");
    }

    #[test]
    fn directory_list_links_index_pages() {
        let html = directory_list(&names(&["docs", "api"])).into_string();
        assert_eq!(
            html,
            "<ul><li><a href=\"docs/index.html\">docs</a></li>\
             <li><a href=\"api/index.html\">api</a></li></ul>"
        );
    }

    #[test]
    fn file_list_empty_is_empty_string() {
        assert_eq!(file_list(&[]).into_string(), "");
    }

    #[test]
    fn file_list_strips_extension_from_label() {
        let html = file_list(&names(&["guide.html"])).into_string();
        assert_eq!(html, "<ul><li><a href=\"guide.html\">guide</a></li></ul>");
    }

    #[test]
    fn link_text_drops_last_five_chars() {
        for name in ["x.html", "index.html", "a.b.html", ".html"] {
            assert_eq!(link_text(name), &name[..name.len() - 5]);
        }
    }

    #[test]
    fn names_are_escaped() {
        let html = file_list(&names(&["<b>.html"])).into_string();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn breadcrumb_links_each_ancestor_in_order() {
        let html = breadcrumb("a/b").into_string();
        let root = html.find("href=\"/index.html\"").unwrap();
        let a = html.find("href=\"/a/index.html\"").unwrap();
        let ab = html.find("href=\"/a/b/index.html\"").unwrap();
        assert!(root < a && a < ab);
        assert!(html.contains(">~</a>"));
    }

    #[test]
    fn breadcrumb_single_segment() {
        let html = breadcrumb("docs").into_string();
        assert_eq!(
            html,
            "<nav class=\"breadcrumb\"><a href=\"/index.html\">~</a> / \
             <a href=\"/docs/index.html\">docs</a></nav>"
        );
    }

    #[test]
    fn search_head_light_has_base_stylesheet_only() {
        let html = search_head(Theme::Light).into_string();
        assert!(html.contains("/search/search.css"));
        assert!(!html.contains("search-dark.css"));
    }

    #[test]
    fn search_head_dark_adds_dark_stylesheet() {
        let html = search_head(Theme::Dark).into_string();
        let dark = html.find("/search/search-dark.css").unwrap();
        let base = html.find("/search/search.css").unwrap();
        assert!(dark < base);
    }

    #[test]
    fn search_body_has_modal_and_four_scripts() {
        let html = search_body().into_string();
        assert!(html.contains("id=\"searchModal\""));
        assert!(html.contains("id=\"searchInput\""));
        assert!(html.contains("id=\"results\""));
        assert_eq!(html.matches("<script src=").count(), 4);
    }

    #[test]
    fn autoscroll_body_has_arrow_and_setup_call() {
        let html = autoscroll_body().into_string();
        let arrow = html.find("id=\"autoscroll-arrow\"").unwrap();
        let script = html.find("/autoscroll/autoscroller.js").unwrap();
        let setup = html.find("setup_autoscroller();").unwrap();
        assert!(arrow < script && script < setup);
    }

    #[test]
    fn widgets_empty_when_disabled() {
        let config = RenderConfig::new(IndexMode::Use);
        assert_eq!(widgets_head(&config).into_string(), "");
        assert_eq!(widgets_body(&config).into_string(), "");
    }

    #[test]
    fn widgets_follow_config_flags() {
        let config = RenderConfig {
            autoscroll: true,
            ..RenderConfig::new(IndexMode::Use)
        };
        let head = widgets_head(&config).into_string();
        let body = widgets_body(&config).into_string();
        assert!(head.contains("autoscroll.css"));
        assert!(!head.contains("search.css"));
        assert!(body.contains("autoscroll-arrow"));
        assert!(!body.contains("searchModal"));

        let both = RenderConfig { search: true, ..config };
        let body = widgets_body(&both).into_string();
        assert!(body.find("searchModal").unwrap() < body.find("autoscroll-arrow").unwrap());
    }
}
