//! HTML sanitizing and escaping.
//!
//! Rich-text note content goes through [`sanitize_html`] before it is shown;
//! every other interpolated string (tag names, dates, form values) goes
//! through [`html_escape`].

use ammonia::Builder;

/// Elements allowed to survive sanitizing. Everything else is unwrapped so
/// its text and allowed descendants remain.
pub const ALLOWED_TAGS: &[&str] = &["b", "strong", "ol", "ul", "li", "br"];

/// Elements whose content is dropped along with the element itself.
const DROPPED_CONTENT_TAGS: &[&str] = &["script", "style"];

// ============================================================================
// Sanitizer
// ============================================================================

/// Restrict `html` to [`ALLOWED_TAGS`].
///
/// Disallowed elements are replaced by their inner content at any nesting
/// depth, and all attributes are removed. Script and style bodies are not
/// text, so they vanish entirely.
pub fn sanitize_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    Builder::empty()
        .add_tags(ALLOWED_TAGS)
        .add_clean_content_tags(DROPPED_CONTENT_TAGS)
        .clean(html)
        .to_string()
}

/// The text a reader would see for `html`, with markup removed and the
/// serializer's entities decoded.
pub fn visible_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let stripped = Builder::empty()
        .add_clean_content_tags(DROPPED_CONTENT_TAGS)
        .clean(html)
        .to_string();
    stripped
        .replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// ============================================================================
// Text Escaping
// ============================================================================

/// Escape the five HTML-significant characters. `&` goes first so the
/// entities produced by later replacements are left alone.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
