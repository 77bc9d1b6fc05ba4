use wasm_bindgen::prelude::*;

/// This module provides a stand-in for the VLibras plugin global so the
/// sign-language loader can be exercised without the remote script.

#[wasm_bindgen(inline_js = r#"
export function setup_vlibras_mock() {
    window.__vlibrasStarted = [];
    window.VLibras = {
        Widget: function(appUrl) {
            console.log("[MOCK VLIBRAS] Widget created for", appUrl);
            window.__vlibrasStarted.push(appUrl);
        }
    };
    return true;
}

export function remove_vlibras_mock() {
    delete window.VLibras;
}

export function started_widgets() {
    return window.__vlibrasStarted || [];
}
"#)]
extern "C" {
    fn setup_vlibras_mock() -> bool;
    fn remove_vlibras_mock();
    fn started_widgets() -> js_sys::Array;
}

pub fn install() -> bool {
    setup_vlibras_mock()
}

pub fn uninstall() {
    remove_vlibras_mock()
}

/// App URLs passed to `new VLibras.Widget(...)` so far
pub fn widgets_started() -> Vec<String> {
    started_widgets().iter().filter_map(|v| v.as_string()).collect()
}
