use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::behaviors::{
    counter, faq, forms, links, motion, navigation, reveal, scroll, service_worker, typewriter,
    Bindings, Page, SharedState,
};
use crate::config::Config;
use crate::state::ViewState;

/// The page's behaviour layer. Owns every listener and observer it registered; dropping it
/// detaches them again and removes the progress bar it inserted.
pub struct Controller {
    page: Rc<Page>,
    state: SharedState,
    bindings: Bindings,
}

fn report(feature: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{} disabled: {:?}", feature, e);
    }
}

impl Controller {
    /// Binds to the current document. Each feature is independent: one that fails to
    /// attach is logged and the rest still run.
    pub fn mount(config: Config) -> Result<Self, JsValue> {
        let page = Rc::new(Page::new(config)?);
        let state: SharedState = Rc::new(RefCell::new(ViewState::default()));
        let mut bindings = Bindings::default();

        report(
            "Mobile menu",
            navigation::install_mobile_menu(&page, &state, &mut bindings),
        );
        report(
            "Smooth anchors",
            navigation::install_smooth_anchors(&page, &mut bindings),
        );
        report("FAQ accordion", faq::install(&page, &state, &mut bindings));
        report("Reveal animation", reveal::install(&page, &state, &mut bindings));
        report("Stat counters", counter::install(&page, &state, &mut bindings));
        typewriter::start(&page);
        report("Forms", forms::install(&page, &mut bindings));
        report("Lazy images", reveal::install_lazy_images(&page, &mut bindings));
        report(
            "Telegram tracking",
            links::install_telegram_tracking(&page, &mut bindings),
        );
        motion::apply_reduced_motion(&page);
        links::inject_year(&page);
        report("Scroll effects", scroll::install(&page, &state, &mut bindings));
        links::harden_external_links(&page);
        report("Service worker", service_worker::install(&page, &mut bindings));

        log::debug!(
            "Controller mounted with {} listeners",
            bindings.listener_count()
        );
        Ok(Self {
            page,
            state,
            bindings,
        })
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        log::debug!(
            "Controller detached ({} listeners)",
            self.bindings.listener_count()
        );
    }
}
