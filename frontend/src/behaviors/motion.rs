use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, SvgElement, Window};

use super::Page;
use crate::dom;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn disable_motion(page: &Page) {
    for el in dom::query_all(&page.document, "*") {
        // SVG icons animate too, they are not HtmlElements
        let style = if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.style()
        } else if let Some(svg) = el.dyn_ref::<SvgElement>() {
            svg.style()
        } else {
            continue;
        };
        let _ = style.set_property("animation", "none");
        let _ = style.set_property("transition", "none");
    }
}

// Checked once, a mid-session preference change is not picked up
pub fn apply_reduced_motion(page: &Page) -> bool {
    if !prefers_reduced_motion(&page.window) {
        return false;
    }
    disable_motion(page);
    log::debug!("Reduced motion requested, animations disabled");
    true
}
