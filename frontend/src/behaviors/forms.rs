use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};

use super::{Bindings, Page};
use crate::dom::{self, Listener};
use crate::state::form::{validate, FieldValue};

fn form_entries(form: &HtmlFormElement) -> Result<Vec<(String, FieldValue)>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let Some(iter) = js_sys::try_iter(&data)? else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for pair in iter {
        let pair: js_sys::Array = pair?.dyn_into()?;
        let name = pair.get(0).as_string().unwrap_or_default();
        let value = match pair.get(1).as_string() {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Blob,
        };
        entries.push((name, value));
    }
    Ok(entries)
}

pub fn install(page: &Rc<Page>, bindings: &mut Bindings) -> Result<(), JsValue> {
    for form in dom::query_all(&page.document, "form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        let window = page.window.clone();
        let target = form.clone();
        bindings.listen(Listener::new(&form, "submit", move |e| {
            e.prevent_default();
            let entries = match form_entries(&target) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Could not read form data: {:?}", e);
                    return;
                }
            };

            let outcome = validate(entries);
            let _ = window.alert_with_message(outcome.message());
            if outcome.clears_form() {
                target.reset();
            }
        })?);
    }
    Ok(())
}
