use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use super::{Bindings, Page, SharedState};
use crate::dom::{self, Observer};
use crate::state::animation::AnimationFlags;

pub fn install(
    page: &Rc<Page>,
    state: &SharedState,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let config = &page.config;
    let targets = Rc::new(dom::query_all_html(&page.document, &config.reveal_selector));
    if targets.is_empty() {
        return Ok(());
    }
    state.borrow_mut().reveals = AnimationFlags::new(targets.len());

    let observer = {
        let targets = targets.clone();
        let state = state.clone();
        Observer::new(
            Some(config.reveal_threshold),
            Some(config.reveal_root_margin.as_str()),
            move |entry, _| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                let Some(index) = dom::index_of(targets.as_slice(), &target) else {
                    return;
                };
                if state.borrow_mut().reveals.trigger(index) {
                    dom::set_style(&targets[index], "opacity", "1");
                    dom::set_style(&targets[index], "transform", "translateY(0)");
                }
            },
        )?
    };

    for el in targets.iter() {
        for (property, value) in config.reveal_initial_style() {
            dom::set_style(el, property, &value);
        }
        observer.observe(el);
    }
    bindings.observe(observer);
    Ok(())
}

pub fn install_lazy_images(page: &Rc<Page>, bindings: &mut Bindings) -> Result<(), JsValue> {
    if !dom::has_property(&page.window, "IntersectionObserver") {
        log::debug!("IntersectionObserver unavailable, lazy images left to the browser");
        return Ok(());
    }
    let images = dom::query_all(&page.document, "img[loading=\"lazy\"]");
    if images.is_empty() {
        return Ok(());
    }

    let observer = Observer::new(None, None, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
            img.set_src(&img.src());
        }
        dom::set_class(&target, "loaded", true);
        observer.unobserve(&target);
    })?;

    for img in &images {
        observer.observe(img);
    }
    bindings.observe(observer);
    Ok(())
}
