#![cfg(target_arch = "wasm32")]

mod common;

use common::*;
use gloo_timers::future::TimeoutFuture;
use vpn_frontend::behaviors::{motion, Page};
use vpn_frontend::{Config, Controller};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::SvgElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn feature_cards_reveal_once() {
    load(LANDING);
    let controller = Controller::mount(Config::default()).unwrap();
    assert_eq!(style(".feature-card", "opacity"), "0");
    assert_eq!(style(".feature-card", "transform"), "translateY(30px)");

    TimeoutFuture::new(300).await;
    assert_eq!(style(".feature-card", "opacity"), "1");
    assert!(controller.with_state(|s| s.reveals.is_done(0)));

    scroll_to(3000.0);
    TimeoutFuture::new(200).await;
    scroll_to(0.0);
    TimeoutFuture::new(200).await;
    assert_eq!(style(".feature-card", "opacity"), "1");
}

#[wasm_bindgen_test]
async fn stat_counts_up_to_exact_target() {
    load(LANDING);
    let _controller = Controller::mount(Config::default()).unwrap();

    TimeoutFuture::new(2_600).await;
    assert!(one(".stat-item").class_list().contains("animated"));
    assert_eq!(one(".stat-item strong").text_content().as_deref(), Some("۱٬۰۰۰"));

    // Re-entering the viewport must not restart the count.
    scroll_to(3000.0);
    TimeoutFuture::new(200).await;
    scroll_to(0.0);
    TimeoutFuture::new(300).await;
    assert_eq!(one(".stat-item strong").text_content().as_deref(), Some("۱٬۰۰۰"));
}

#[wasm_bindgen_test]
async fn typewriter_retypes_title_when_enabled() {
    load(LANDING);
    let config = Config {
        typewriter_speed_ms: Some(1),
        ..Config::default()
    };
    let _controller = Controller::mount(config).unwrap();

    assert_eq!(one(".hero-title").inner_html(), "");
    TimeoutFuture::new(500).await;
    assert_eq!(one(".hero-title").inner_html(), "VPN <span>fast</span>");
}

#[wasm_bindgen_test]
fn reduced_motion_strips_transitions_from_html_and_svg() {
    load(&format!(
        "{}<svg class=\"icon\" style=\"transition: opacity 1s\"><circle r=\"4\"/></svg>",
        LANDING
    ));
    let _controller = Controller::mount(Config::default()).unwrap();
    assert_ne!(style(".feature-card", "transition"), "none");

    motion::disable_motion(&Page::new(Config::default()).unwrap());

    assert_eq!(style(".feature-card", "transition"), "none");
    assert_eq!(style(".feature-card", "animation"), "none");
    let svg: SvgElement = one("svg.icon").dyn_into().unwrap();
    assert_eq!(svg.style().get_property_value("transition").unwrap(), "none");
}
