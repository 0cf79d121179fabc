use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::{Bindings, Page, SharedState};
use crate::dom::{self, Listener};
use crate::state::accordion::Accordion;

const EXPANDED: &str = "active";

pub fn install(
    page: &Rc<Page>,
    state: &SharedState,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let items = Rc::new(dom::query_all(&page.document, ".faq-item"));
    if items.is_empty() {
        return Ok(());
    }
    state.borrow_mut().accordion =
        Accordion::from_open_flags(items.iter().map(|item| dom::has_class(item, EXPANDED)));

    for question in dom::query_all(&page.document, ".faq-question") {
        let Some(index) = question
            .parent_element()
            .and_then(|parent| dom::index_of(items.as_slice(), &parent))
        else {
            log::debug!("FAQ question outside a .faq-item, skipped");
            continue;
        };

        let items = items.clone();
        let state = state.clone();
        bindings.listen(Listener::new(&question, "click", move |_| {
            let mut state = state.borrow_mut();
            state.accordion.toggle(index);
            for (i, item) in items.iter().enumerate() {
                dom::set_class(item, EXPANDED, state.accordion.is_expanded(i));
            }
        })?);
    }
    Ok(())
}
