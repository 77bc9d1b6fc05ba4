use wasm_bindgen::prelude::*;

/// This module replaces `window.alert` so validation failures can be asserted
/// on without a blocking dialog in the test browser.

#[wasm_bindgen(inline_js = r#"
export function setup_alert_mock() {
    window.__alerts = [];
    window.alert = function(message) {
        console.log("[MOCK ALERT]", message);
        window.__alerts.push(String(message));
    };
    return true;
}

export function take_alerts() {
    const alerts = window.__alerts || [];
    window.__alerts = [];
    return alerts;
}
"#)]
extern "C" {
    fn setup_alert_mock() -> bool;
    fn take_alerts() -> js_sys::Array;
}

/// Installs the mock and forgets any alert recorded so far
pub fn install() -> bool {
    setup_alert_mock()
}

/// Alerts shown since the last call
pub fn recorded_alerts() -> Vec<String> {
    take_alerts().iter().filter_map(|v| v.as_string()).collect()
}
