//! Loader for the VLibras sign-language overlay.
//!
//! The plugin script is appended to `<body>` at most once per page; once it
//! has loaded, `new window.VLibras.Widget(appUrl)` starts the overlay.

use js_sys::{Array, Function, Reflect};
use leptos::logging::{error, log, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlScriptElement};

/// Whether a `<script>` with exactly this `src` is already in the document.
pub fn is_script_present(document: &Document, src: &str) -> bool {
    document
        .query_selector(&format!("script[src=\"{}\"]", src))
        .ok()
        .flatten()
        .is_some()
}

/// Injects the plugin script unless it is already present. Returns whether a
/// script was added.
pub fn load_sign_language_widget(script_url: &str, app_url: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    if is_script_present(&document, script_url) {
        log!("[A11Y] VLibras script already present");
        return false;
    }

    match inject_script(&document, script_url, app_url.to_string()) {
        Ok(()) => {
            log!("[A11Y] VLibras script injected: {}", script_url);
            true
        }
        Err(e) => {
            error!("[A11Y] Could not inject VLibras script: {:?}", e);
            false
        }
    }
}

fn inject_script(document: &Document, script_url: &str, app_url: String) -> Result<(), JsValue> {
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(script_url);

    let on_load = Closure::once_into_js(move || {
        if let Err(e) = start_widget(&app_url) {
            warn!("[A11Y] VLibras widget not started: {:?}", e);
        }
    });
    script.set_onload(Some(on_load.unchecked_ref()));

    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&script)?;
    Ok(())
}

/// `new window.VLibras.Widget(appUrl)`; errors when the global is missing.
pub fn start_widget(app_url: &str) -> Result<JsValue, JsValue> {
    let vlibras = Reflect::get(&js_sys::global(), &"VLibras".into())?;
    if vlibras.is_undefined() {
        return Err(JsValue::from_str("window.VLibras is not defined"));
    }
    let widget: Function = Reflect::get(&vlibras, &"Widget".into())?.dyn_into()?;
    let instance = Reflect::construct(&widget, &Array::of1(&JsValue::from_str(app_url)))?;
    log!("[A11Y] VLibras widget started");
    Ok(instance)
}
