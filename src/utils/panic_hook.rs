use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards to `console_error_panic_hook` and adds a
/// tagged line pointing at the panic location.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        log!("[PANIC] {} at {}", message, location);
        if message.contains("OwnerDisposed") {
            log!("[PANIC] A callback ran after its component was unmounted");
        }
    }));
}

/// Call once at startup, before mounting the app
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}
