pub mod behaviors;
pub mod config;
pub mod controller;
pub mod dom;
pub mod state;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub use config::Config;
pub use controller::Controller;

fn mount(config: Config) {
    match Controller::mount(config) {
        Ok(controller) => {
            gloo_console::log!("🚀 VPN Iran website loaded successfully!");
            gloo_console::log!("📱 Contact: @erfwpbot on Telegram");
            controller.forget();
        }
        Err(e) => log::error!("Failed to start page behaviours: {:?}", e),
    }
}

/// Mounts the controller once the document is parsed.
pub fn run(config: Config) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document to bind to");
        return;
    };

    if document.ready_state() != "loading" {
        mount(config);
        return;
    }

    let on_ready = Closure::once_into_js(move || mount(config));
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::error!("Could not wait for DOMContentLoaded: {:?}", e);
    }
}
