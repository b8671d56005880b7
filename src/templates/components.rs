//! Shared HTML components for the note client.
//!
//! Contains the navigation bar with the search boxes, notices, and the base
//! page template.

use crate::pagination::Filter;
use crate::sanitize::html_escape;
use crate::session::{Notice, NoticeKind};

use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(filter: &Filter) -> String {
    let (tag_term, title_term) = match filter {
        Filter::Title(title) => (String::new(), title.clone()),
        other => (other.display_term(), String::new()),
    };
    let clear_link = if filter.is_active() {
        r#"<a href="/search/clear" class="btn">Clear</a>"#
    } else {
        ""
    };

    format!(
        r#"<nav class="nav-bar">
            <a href="/">All notes</a>
            <span class="spacer"></span>
            <form class="search-box" action="/search" method="get">
                <input type="text" name="tags" id="tagSearchInput" placeholder="Tags: a, b" value="{}">
                <button type="submit">Search</button>
            </form>
            <form class="search-box" action="/search" method="get">
                <input type="text" name="title" placeholder="Title..." value="{}">
                <button type="submit">Go</button>
            </form>
            {}
        </nav>"#,
        html_escape(&tag_term),
        html_escape(&title_term),
        clear_link
    )
}

// ============================================================================
// Notices
// ============================================================================

/// Successes fade out on their own; errors block the page until dismissed.
/// Each error dialog gets its own anchor so dismissing one leaves the rest.
pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .enumerate()
        .map(|(i, notice)| match notice.kind {
            NoticeKind::Success => format!(
                r#"<div class="toast" role="status">{}</div>"#,
                html_escape(&notice.message)
            ),
            NoticeKind::Error => format!(
                r##"<div class="alert-overlay" id="notice-alert-{i}" role="alertdialog">
                <div class="alert-dialog">
                    <p>Error: {}</p>
                    <a href="#notice-alert-{i}" class="btn">OK</a>
                </div>
            </div>"##,
                html_escape(&notice.message)
            ),
        })
        .collect()
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(
    title: &str,
    main: &str,
    sidebar: &str,
    filter: &Filter,
    notices: &[Notice],
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    {nav}
    <div class="container">
        <main>{main}</main>
        <aside class="sidebar">{sidebar}</aside>
    </div>
    {notices}
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        nav = nav_bar(filter),
        main = main,
        sidebar = sidebar,
        notices = render_notices(notices),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_prefills_tag_term() {
        let html = nav_bar(&Filter::Tags(vec!["a".into(), "<b>".into()]));
        assert!(html.contains(r#"value="a, &lt;b&gt;""#));
        assert!(html.contains("/search/clear"));
    }

    #[test]
    fn test_nav_bar_without_filter_has_no_clear() {
        assert!(!nav_bar(&Filter::None).contains("/search/clear"));
    }

    #[test]
    fn test_notices() {
        assert_eq!(render_notices(&[]), "");
        let ok = render_notices(&[Notice::success("Saved <ok>")]);
        assert!(ok.contains("toast"));
        assert!(ok.contains("Saved &lt;ok&gt;"));
        let err = render_notices(&[Notice::error("Failed to save note")]);
        assert!(err.contains("alert-overlay"));
        assert!(err.contains("Error: Failed to save note"));
    }

    #[test]
    fn test_error_and_success_render_together() {
        let html = render_notices(&[
            Notice::error("Failed to load notes"),
            Notice::success("Note saved successfully!"),
            Notice::error("Failed to load tags"),
        ]);
        assert!(html.contains(r#"id="notice-alert-0""#));
        assert!(html.contains(r#"id="notice-alert-2""#));
        assert!(html.contains(r#"<div class="toast" role="status">Note saved successfully!</div>"#));
    }
}
