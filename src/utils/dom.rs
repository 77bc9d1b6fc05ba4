use leptos::logging::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Vertical scroll position of the window, 0 when unknown.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// `offsetTop` of the element matching `selector`, if there is one.
pub fn offset_top(selector: &str) -> Option<i32> {
    let element = web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?;
    Some(element.dyn_into::<HtmlElement>().ok()?.offset_top())
}

/// Blocking notification for the visitor.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            error!("[DOM] alert failed: {:?}", e);
        }
    }
}

pub fn set_class(element: &web_sys::Element, class: &str, enabled: bool) {
    let classes = element.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        error!("[DOM] could not update class '{}': {:?}", class, e);
    }
}

/// Locks or releases page scrolling behind an open overlay.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        error!("[DOM] could not update body overflow: {:?}", e);
    }
}
