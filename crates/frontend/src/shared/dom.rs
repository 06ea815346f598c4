//! Thin helpers over `web_sys` for the few places that touch the page
//! outside of a mounted component.

use contracts::domain::a001_nav_menu::aggregate::SCROLL_LOCK_CLASS;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn find_host(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// `window.innerWidth` in logical pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Set or clear the `no-scroll` class on `<body>`.
pub fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::debug!("document.body not available, scroll lock skipped");
        return;
    };
    if let Err(err) = body.class_list().toggle_with_force(SCROLL_LOCK_CLASS, locked) {
        log::warn!("Failed to toggle .{}: {:?}", SCROLL_LOCK_CLASS, err);
    }
}
