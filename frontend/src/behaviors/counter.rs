use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use web_sys::Element;

use super::{Bindings, Page, SharedState};
use crate::config::Config;
use crate::dom::{self, Observer};
use crate::state::animation::AnimationFlags;
use crate::state::counter::{parse_target, CounterAnimation, CounterTick};

const ANIMATED: &str = "animated";

fn start_count_up(display: Element, target: f64, config: &Config) {
    let locale = config.counter_locale;
    let mut animation = CounterAnimation::new(
        target,
        config.counter_duration_ms,
        config.counter_tick_ms,
    );
    display.set_text_content(Some("0"));

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();
    let interval = Interval::new(config.counter_tick_ms, move || match animation.tick() {
        CounterTick::Running(value) => {
            display.set_text_content(Some(&locale.format(value)));
        }
        CounterTick::Finished(value) => {
            display.set_text_content(Some(&locale.format(value)));
            if let Some(interval) = handle_clone.borrow_mut().take() {
                drop(interval);
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}

pub fn install(
    page: &Rc<Page>,
    state: &SharedState,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let stats = Rc::new(dom::query_all(&page.document, ".stat-item"));
    if stats.is_empty() {
        return Ok(());
    }
    state.borrow_mut().counters =
        AnimationFlags::from_flags(stats.iter().map(|stat| dom::has_class(stat, ANIMATED)));

    let observer = {
        let page = page.clone();
        let stats = stats.clone();
        let state = state.clone();
        Observer::new(Some(page.config.counter_threshold), None, move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let stat = entry.target();
            let Some(index) = dom::index_of(stats.as_slice(), &stat) else {
                return;
            };
            if !state.borrow_mut().counters.trigger(index) {
                return;
            }
            dom::set_class(&stat, ANIMATED, true);

            let Some(display) = dom::query_one(&stat, "strong") else {
                log::debug!("Stat without a <strong> value");
                return;
            };
            let text = display.text_content().unwrap_or_default();
            match parse_target(&text) {
                Some(target) => start_count_up(display, target, &page.config),
                None => log::debug!("Stat value {:?} is not a number", text),
            }
        })?
    };

    for stat in stats.iter() {
        observer.observe(stat);
    }
    bindings.observe(observer);
    Ok(())
}
