//! Clock Display
//!
//! Writes the current local date/time into a display element, once at
//! startup and then on a fixed interval for the lifetime of the page.

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;

/// Current wall-clock time in the host's locale-aware format
pub fn now_string() -> String {
    let now = js_sys::Date::new_0();
    now.to_locale_string("default", &JsValue::UNDEFINED).into()
}

/// Refresh the element with `element_id`.
/// Returns `false` without doing anything when the element is absent.
pub fn tick(element_id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return false;
    };
    element.set_text_content(Some(&now_string()));
    true
}

/// Tick now, then every `interval_ms`. The interval is never cancelled.
pub fn start(element_id: &'static str, interval_ms: u32) {
    if !tick(element_id) {
        log::debug!("[CLOCK] #{} not present yet", element_id);
    }
    Interval::new(interval_ms, move || {
        tick(element_id);
    })
    .forget();
}
