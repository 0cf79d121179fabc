use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use super::{Bindings, Page, SharedState};
use crate::dom::{self, Listener};
use crate::state::nav::SectionBounds;
use crate::state::scroll::{ScrollFrame, ScrollMetrics};

const ACTIVE: &str = "active";
const SHOW: &str = "show";

struct ScrollTargets {
    header: Option<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    hero_image: Option<HtmlElement>,
    progress_bar: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    nav_links: Vec<Element>,
}

impl ScrollTargets {
    fn collect(page: &Page) -> Self {
        let doc = &page.document;
        Self {
            header: dom::query_one_html(doc, ".header"),
            back_to_top: dom::query_one_html(doc, ".back-to-top"),
            hero: dom::query_one_html(doc, ".hero"),
            hero_image: dom::query_one_html(doc, ".hero-image"),
            progress_bar: None,
            sections: dom::query_all_html(doc, "section[id]"),
            nav_links: dom::query_all(doc, ".nav-link"),
        }
    }

    fn metrics(&self, page: &Page) -> ScrollMetrics {
        let (scroll_height, client_height) = page
            .document
            .document_element()
            .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
            .unwrap_or_default();

        ScrollMetrics {
            offset: dom::scroll_offset(&page.window),
            scroll_height,
            client_height,
            hero_height: match (&self.hero, &self.hero_image) {
                (Some(hero), Some(_)) => Some(hero.offset_height() as f64),
                _ => None,
            },
        }
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect()
    }
}

fn create_progress_bar(page: &Page, bindings: &mut Bindings) -> Result<HtmlElement, JsValue> {
    let bar = page
        .document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    bar.set_class_name("scroll-progress");
    bar.set_attribute("style", &page.config.progress_bar_css())?;

    let body = page
        .document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&bar)?;
    bindings.created(bar.clone().into());
    Ok(bar)
}

// Runs on every scroll and once at startup
fn update_chrome(
    page: &Page,
    targets: &ScrollTargets,
    state: &SharedState,
    frame: &ScrollFrame,
    offset: f64,
) {
    if let Some(header) = &targets.header {
        dom::set_style(header, "background", frame.header.background());
        dom::set_style(header, "box-shadow", frame.header.box_shadow());
    }

    if let Some(button) = &targets.back_to_top {
        dom::set_class(button, SHOW, frame.back_to_top);
    }

    let sections = targets.section_bounds();
    let mut state = state.borrow_mut();
    if let Some(id) = state.nav.update(&sections, offset, page.config.header_offset) {
        let href = format!("#{}", id);
        let current = targets
            .nav_links
            .iter()
            .position(|link| link.get_attribute("href").as_deref() == Some(href.as_str()));
        for (i, link) in targets.nav_links.iter().enumerate() {
            dom::set_class(link, ACTIVE, Some(i) == current);
        }
    }
}

// Scroll events only
fn update_motion(targets: &ScrollTargets, frame: &ScrollFrame) {
    if let (Some(image), Some(shift)) = (&targets.hero_image, frame.parallax_shift) {
        dom::set_style(image, "transform", &format!("translateY({}px)", shift));
    }

    if let Some(bar) = &targets.progress_bar {
        dom::set_style(bar, "width", &format!("{}%", frame.progress_percent));
    }
}

pub fn install(
    page: &Rc<Page>,
    state: &SharedState,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let mut targets = ScrollTargets::collect(page);
    match create_progress_bar(page, bindings) {
        Ok(bar) => targets.progress_bar = Some(bar),
        Err(e) => log::warn!("Scroll progress bar unavailable: {:?}", e),
    }
    let targets = Rc::new(targets);

    let on_scroll = {
        let page = page.clone();
        let targets = targets.clone();
        let state = state.clone();
        move |_| {
            let metrics = targets.metrics(&page);
            let frame = ScrollFrame::compute(&metrics, &page.config);
            update_chrome(&page, &targets, &state, &frame, metrics.offset);
            update_motion(&targets, &frame);
        }
    };
    bindings.listen(Listener::new(&page.window, "scroll", on_scroll)?);

    if let Some(button) = &targets.back_to_top {
        let window = page.window.clone();
        bindings.listen(Listener::new(button, "click", move |_| {
            dom::smooth_scroll_to(&window, 0.0);
        })?);
    }

    // Initial check
    let metrics = targets.metrics(page);
    let frame = ScrollFrame::compute(&metrics, &page.config);
    update_chrome(page, &targets, state, &frame, metrics.offset);
    Ok(())
}
