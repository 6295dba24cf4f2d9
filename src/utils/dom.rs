//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs.

use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the document `<body>`.
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Scroll an element to its bottom edge.
pub fn scroll_to_bottom(element: &web_sys::Element) {
    element.set_scroll_top(element.scroll_height());
}
