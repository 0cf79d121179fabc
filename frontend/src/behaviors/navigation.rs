use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::{Bindings, Page, SharedState};
use crate::dom::{self, Listener};
use crate::state::menu::MobileMenu;

const MENU_OPEN: &str = "active";

fn paint_menu(menu_el: &Element, toggle: &Element, menu: MobileMenu) {
    dom::set_class(menu_el, MENU_OPEN, menu.is_open());
    if let Some(icon) = dom::query_one(toggle, "i") {
        let (shown, hidden) = menu.icon_classes();
        dom::set_class(&icon, hidden, false);
        dom::set_class(&icon, shown, true);
    }
}

pub fn install_mobile_menu(
    page: &Rc<Page>,
    state: &SharedState,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let doc = &page.document;
    let (Some(toggle), Some(menu_el)) = (
        dom::query_one(doc, ".mobile-menu-toggle"),
        dom::query_one(doc, ".nav-menu"),
    ) else {
        log::debug!("No mobile menu on this page");
        return Ok(());
    };

    state.borrow_mut().menu = MobileMenu::new(dom::has_class(&menu_el, MENU_OPEN));

    {
        let state = state.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu_el.clone());
        bindings.listen(Listener::new(&toggle, "click", move |_| {
            let mut state = state.borrow_mut();
            state.menu.toggle();
            paint_menu(&menu_el, &toggle_el, state.menu);
        })?);
    }

    for link in dom::query_all(doc, ".nav-link") {
        let state = state.clone();
        let (toggle, menu_el) = (toggle.clone(), menu_el.clone());
        bindings.listen(Listener::new(&link, "click", move |_| {
            let mut state = state.borrow_mut();
            if state.menu.close() {
                paint_menu(&menu_el, &toggle, state.menu);
            }
        })?);
    }
    Ok(())
}

pub fn install_smooth_anchors(page: &Rc<Page>, bindings: &mut Bindings) -> Result<(), JsValue> {
    for anchor in dom::query_all(&page.document, "a[href^=\"#\"]") {
        let page = page.clone();
        let link = anchor.clone();
        bindings.listen(Listener::new(&anchor, "click", move |e| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(target) = dom::query_one(&page.document, &href) else {
                return;
            };
            e.prevent_default();
            let top = target.get_bounding_client_rect().top() + dom::scroll_offset(&page.window)
                - page.config.header_offset;
            dom::smooth_scroll_to(&page.window, top);
        })?);
    }
    Ok(())
}
