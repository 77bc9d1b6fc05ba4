use leptos::*;
use leptos::logging::error;

use crate::config::use_site_config;
use crate::models::preferences::{
    FontScale, Preferences, FONT_DECREASED_CLASS, FONT_INCREASED_CLASS, HIGH_CONTRAST_CLASS,
};
use crate::storage::LocalStorage;
use crate::utils::dom::{scroll_to_top, scroll_y, set_class};
use crate::vlibras::load_sign_language_widget;

/// Puts the font classes on `<html>` and the contrast class on `<body>`.
pub fn apply_preferences(prefs: Preferences) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let active = prefs.font.class();
        for class in [FONT_INCREASED_CLASS, FONT_DECREASED_CLASS] {
            set_class(&root, class, active == Some(class));
        }
    }
    if let Some(body) = document.body() {
        set_class(&body, HIGH_CONTRAST_CLASS, prefs.high_contrast);
    }
}

/// Font size and contrast controls, the back-to-top button and the VLibras
/// overlay. Choices persist across pages.
#[component]
pub fn AccessibilityBar() -> impl IntoView {
    let config = use_site_config();

    let saved = Preferences::load(&LocalStorage, &config).unwrap_or_else(|e| {
        error!("[A11Y] Could not read saved preferences: {}", e);
        Preferences::default()
    });
    let prefs = create_rw_signal(saved);

    let store_config = config.clone();
    create_effect(move |_| {
        let current = prefs.get();
        apply_preferences(current);
        if let Err(e) = current.save(&LocalStorage, &store_config) {
            error!("[A11Y] Could not save preferences: {}", e);
        }
    });

    load_sign_language_widget(&config.vlibras_script_url, &config.vlibras_app_url);

    let threshold = config.scroll_top_offset;
    let (show_back_to_top, set_show_back_to_top) = create_signal(scroll_y() > threshold);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_show_back_to_top.set(scroll_y() > threshold);
    });
    on_cleanup(move || scroll_listener.remove());

    let set_font = move |font: FontScale| prefs.update(|p| p.font = font);

    view! {
        <div class="accessibility-bar" role="toolbar" aria-label="Acessibilidade">
            <button id="aumentar-fonte" aria-label="Aumentar fonte" on:click=move |_| set_font(FontScale::Increased)>
                { "A+" }
            </button>
            <button id="diminuir-fonte" aria-label="Diminuir fonte" on:click=move |_| set_font(FontScale::Decreased)>
                { "A-" }
            </button>
            <button id="resetar-fonte" aria-label="Tamanho padrão" on:click=move |_| set_font(FontScale::Normal)>
                { "A" }
            </button>
            <button
                id="toggle-contraste"
                aria-label="Alto contraste"
                aria-pressed=move || prefs.get().high_contrast.to_string()
                on:click=move |_| prefs.update(|p| p.high_contrast = !p.high_contrast)
            >
                { "Contraste" }
            </button>
        </div>
        <button
            id="voltar-topo"
            aria-label="Voltar ao topo"
            style:display=move || if show_back_to_top.get() { "block" } else { "none" }
            on:click=move |_| scroll_to_top()
        >
            { "↑" }
        </button>
    }
}
