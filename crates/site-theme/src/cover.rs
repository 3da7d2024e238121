//! Inline-style mutation of the landing page's cover element.

use crate::COVER_SELECTOR;
use crate::pair::ColorPair;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Paints `pair` onto the cover element as a horizontal gradient.
///
/// Pages without a cover element (every non-landing page) are left untouched.
/// Repeated calls with the same pair write the same style properties.
pub fn apply_cover(pair: &ColorPair) {
    let Some(element) = gloo::utils::document()
        .query_selector(COVER_SELECTOR)
        .ok()
        .flatten()
    else {
        debug!("no {COVER_SELECTOR} element found, leaving the page as is");
        return;
    };
    let Some(cover) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let ColorPair {
        left_hex,
        right_hex,
        ..
    } = pair;
    let style = cover.style();
    let _ = style.set_property(
        "background-image",
        &format!("linear-gradient(90deg, {left_hex} 0%, {right_hex} 100%)"),
    );
    // Solid fallback when the gradient is not rendered.
    let _ = style.set_property("background-color", left_hex);
    let _ = style.set_property("background-size", "cover");
    let _ = style.set_property("background-position", "center");
    debug!("cover background set to {left_hex} .. {right_hex}");
}
