use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::state::number_format::NumberLocale;

pub const CONFIG_GLOBAL: &str = "VPN_SITE_CONFIG";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every page behaviour.
///
/// `Default` carries the values the landing page was designed with. Any subset can be
/// overridden from `window.VPN_SITE_CONFIG`, using the field names below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // Fixed header height, used for nav highlight and anchor scrolling
    pub header_offset: f64,
    pub header_scrolled_after: f64,
    pub back_to_top_after: f64,

    pub reveal_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_shift_px: f64,
    pub reveal_duration_s: f64,

    pub counter_threshold: f64,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_locale: NumberLocale,

    pub parallax_rate: f64,

    pub progress_height_px: f64,
    pub progress_background: String,

    // None leaves the title alone
    pub typewriter_speed_ms: Option<u32>,
    // None keeps it dormant
    pub service_worker: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            header_scrolled_after: 50.0,
            back_to_top_after: 500.0,
            reveal_selector: ".feature-card, .step-card, .pricing-card, .testimonial-card, \
                              .about-image, .about-text, .contact-item, .contact-image"
                .to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_shift_px: 30.0,
            reveal_duration_s: 0.6,
            counter_threshold: 0.5,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            counter_locale: NumberLocale::Persian,
            parallax_rate: 0.5,
            progress_height_px: 3.0,
            progress_background: "linear-gradient(90deg, #2563eb, #10b981)".to_string(),
            typewriter_speed_ms: None,
            service_worker: None,
        }
    }
}

impl Config {
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(value)
    }

    pub fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<Config>(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn reveal_initial_style(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.reveal_shift_px)),
            (
                "transition",
                format!(
                    "opacity {d}s ease, transform {d}s ease",
                    d = self.reveal_duration_s
                ),
            ),
        ]
    }

    pub fn progress_bar_css(&self) -> String {
        format!(
            "position: fixed; top: 0; left: 0; width: 0%; height: {}px; background: {}; \
             z-index: 9999; transition: width 0.1s ease;",
            self.progress_height_px, self.progress_background
        )
    }
}
