//! Page navigation helpers: job search links, the mobile menu and the header
//! scroll state.

use crate::dom::{Document, RenderError};

/// Scroll offset beyond which the header is drawn raised
pub const HEADER_SCROLL_OFFSET: f64 = 8.0;

pub const HEADER_ID: &str = "siteHeader";

const RAISED_CLASS: &str = "shadow-lg";

const HIDDEN_CLASS: &str = "hidden";

/// Link to the jobs page for a search query.
pub fn search_href(query: &str) -> String {
    format!("/pages/jobs.html?q={}", urlencoding::encode(query.trim()))
}

/// Apply the header style for the current scroll offset.
pub fn update_header(doc: &mut Document, scroll_y: f64) -> Result<(), RenderError> {
    if scroll_y > HEADER_SCROLL_OFFSET {
        doc.add_class(HEADER_ID, RAISED_CLASS)
    } else {
        doc.remove_class(HEADER_ID, RAISED_CLASS)
    }
}

/// Mobile menu button: show or hide the page's first `nav`. Returns whether
/// the nav is now hidden, or `None` when the page has no nav.
pub fn toggle_nav(doc: &mut Document) -> Option<bool> {
    let id = doc.first_with_tag("nav")?.to_string();
    doc.toggle_class(&id, HIDDEN_CLASS).ok()
}
