use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::Page;
use crate::dom;
use crate::state::typewriter::chunks;

pub fn start(page: &Page) {
    let Some(speed) = page.config.typewriter_speed_ms else {
        return;
    };
    let Some(title) = dom::query_one(&page.document, ".hero-title") else {
        return;
    };

    let original = title.inner_html();
    title.set_inner_html("");
    spawn_local(async move {
        let mut typed = String::with_capacity(original.len());
        for chunk in chunks(&original) {
            typed.push_str(chunk);
            title.set_inner_html(&typed);
            TimeoutFuture::new(speed).await;
        }
    });
}
