#![allow(dead_code)]

use wasm_bindgen::{JsCast, JsValue};
use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element, Event, HtmlElement, Window};

// Trimmed copy of the landing page markup
pub const LANDING: &str = r##"
<style>body { margin: 0; }</style>
<div class="header" style="position: fixed; top: 0; height: 0;"></div>
<nav style="position: fixed; top: 0;">
  <button class="mobile-menu-toggle"><i class="fas fa-bars"></i></button>
  <ul class="nav-menu">
    <li><a class="nav-link" href="#home">Home</a></li>
    <li><a class="nav-link" href="#features">Features</a></li>
    <li><a class="nav-link" href="#faq">FAQ</a></li>
  </ul>
</nav>
<section id="home" class="hero" style="height: 700px;">
  <h1 class="hero-title">VPN <span>fast</span></h1>
  <div class="hero-image">img</div>
  <div class="stat-item"><strong>1,000+</strong><span>users</span></div>
  <div class="feature-card">secure</div>
</section>
<section id="features" style="height: 2000px;">
  <a href="https://example.org" target="_blank">partner</a>
  <a href="https://t.me/erfwpbot" target="_blank">bot</a>
</section>
<section id="faq" style="height: 1500px;">
  <div class="faq-item"><div class="faq-question">Q1</div><div>A1</div></div>
  <div class="faq-item"><div class="faq-question">Q2</div><div>A2</div></div>
  <div class="faq-item"><div class="faq-question">Q3</div><div>A3</div></div>
</section>
<form id="contact">
  <input name="name" value="Ali">
  <input name="email" value="">
  <button type="submit">send</button>
</form>
<footer>&copy; <span class="current-year">2000</span></footer>
<button class="back-to-top">top</button>
"##;

pub fn window() -> Window {
    web_sys::window().expect("window")
}

pub fn document() -> Document {
    window().document().expect("document")
}

pub fn load(html: &str) {
    document().body().expect("body").set_inner_html(html);
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn one(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .expect("selector")
        .unwrap_or_else(|| panic!("missing {}", selector))
}

pub fn html(selector: &str) -> HtmlElement {
    one(selector).dyn_into().expect("html element")
}

pub fn all(selector: &str) -> Vec<Element> {
    let nodes = document().query_selector_all(selector).expect("selector");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into().ok())
        .collect()
}

pub fn style(selector: &str, property: &str) -> String {
    html(selector)
        .style()
        .get_property_value(property)
        .expect("style")
}

// Scroll events are async, deliver one right away
pub fn scroll_to(offset: f64) {
    let window = window();
    window.scroll_to_with_x_and_y(0.0, offset);
    window
        .dispatch_event(&Event::new("scroll").expect("event"))
        .expect("dispatch");
}

pub fn capture_alerts() {
    let recorder = js_sys::Function::new_with_args(
        "msg",
        "(window.__alerts = window.__alerts || []).push(msg);",
    );
    js_sys::Reflect::set(&window(), &JsValue::from_str("alert"), &recorder).expect("alert");
    js_sys::Reflect::set(&window(), &JsValue::from_str("__alerts"), &js_sys::Array::new())
        .expect("alerts");
}

pub fn alerts() -> Vec<String> {
    let recorded = js_sys::Reflect::get(&window(), &JsValue::from_str("__alerts")).expect("alerts");
    js_sys::Array::from(&recorded)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

// Polls until a smooth scroll reaches `target` or gives up after ~2s
pub async fn settle_at(target: f64) -> f64 {
    for _ in 0..40 {
        TimeoutFuture::new(50).await;
        if (window().scroll_y().expect("scroll_y") - target).abs() < 1.0 {
            break;
        }
    }
    window().scroll_y().expect("scroll_y")
}
