use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::{Bindings, Page};
use crate::dom::{self, Listener};

pub fn harden_external_links(page: &Page) {
    for link in dom::query_all(&page.document, "a[target=\"_blank\"]") {
        let _ = link.set_attribute("rel", "noopener noreferrer");
    }
}

pub fn inject_year(page: &Page) {
    let year = chrono::Local::now().year().to_string();
    for el in dom::query_all(&page.document, ".current-year") {
        el.set_text_content(Some(&year));
    }
}

pub fn install_telegram_tracking(
    page: &Rc<Page>,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    for link in dom::query_all(&page.document, "a[href*=\"t.me\"]") {
        let target = link.clone();
        bindings.listen(Listener::new(&link, "click", move |_| {
            // Resolved URL, not the raw attribute
            let href = match target.dyn_ref::<HtmlAnchorElement>() {
                Some(anchor) => anchor.href(),
                None => target.get_attribute("href").unwrap_or_default(),
            };
            log::info!("Telegram bot link clicked: {}", href);
        })?);
    }
    Ok(())
}
