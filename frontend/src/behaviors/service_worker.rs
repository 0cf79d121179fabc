use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::{Bindings, Page};
use crate::dom::{self, Listener};

pub fn install(page: &Rc<Page>, bindings: &mut Bindings) -> Result<(), JsValue> {
    let Some(url) = page.config.service_worker.clone() else {
        return Ok(());
    };
    let navigator = page.window.navigator();
    if !dom::has_property(&navigator, "serviceWorker") {
        log::debug!("Service workers unsupported");
        return Ok(());
    }

    bindings.listen(Listener::new(&page.window, "load", move |_| {
        let container = navigator.service_worker();
        let url = url.clone();
        spawn_local(async move {
            match JsFuture::from(container.register(&url)).await {
                Ok(registration) => log::info!("ServiceWorker registered: {:?}", registration),
                Err(e) => log::warn!("ServiceWorker registration failed: {:?}", e),
            }
        });
    })?);
    Ok(())
}
