use leptos::*;
use leptos::html::{Button, Ul};
use leptos_router::use_location;
use wasm_bindgen::JsCast;

use crate::config::use_site_config;
use crate::models::navigation::{anchor_scroll_top, is_active_link, is_in_page_anchor, NAV_LINKS};
use crate::utils::dom::{offset_top, scroll_y, set_body_scroll_locked, smooth_scroll_to};

/// Smooth-scrolls clicks on in-page anchors (`href="#id"`) anywhere in the
/// document, keeping the target clear of the fixed navbar.
pub fn use_smooth_anchor_scroll(navbar_height: i32) {
    let listener = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Some(anchor) = target.closest("a[href^=\"#\"]").ok().flatten() else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if !is_in_page_anchor(&href) {
            return;
        }
        ev.prevent_default();
        if let Some(top) = offset_top(&href) {
            smooth_scroll_to(anchor_scroll_top(top, navbar_height));
        }
    });
    on_cleanup(move || listener.remove());
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_site_config();
    let pathname = use_location().pathname;

    let scrolled_offset = config.navbar_scrolled_offset;
    let (scrolled, set_scrolled) = create_signal(scroll_y() > scrolled_offset);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(scroll_y() > scrolled_offset);
    });
    on_cleanup(move || scroll_listener.remove());

    let (menu_open, set_menu_open) = create_signal(false);
    create_effect(move |_| set_body_scroll_locked(menu_open.get()));

    let menu_ref = create_node_ref::<Ul>();
    let toggle_ref = create_node_ref::<Button>();

    // Clicking anywhere outside the open menu closes it.
    let outside_listener = window_event_listener(ev::click, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let in_menu = menu_ref
            .get_untracked()
            .is_some_and(|menu| menu.contains(Some(&target)));
        let in_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|toggle| toggle.contains(Some(&target)));
        if !in_menu && !in_toggle {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_listener.remove());

    use_smooth_anchor_scroll(config.anchor_offset);

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar-container">
                <a href="/" class="navbar-logo">
                    <img src="images/logo.png" alt=config.brand.clone() class="navbar-logo-img" />
                    <span class="navbar-logo-text">{config.brand.clone()}</span>
                </a>

                <ul class="navbar-menu" class:active=move || menu_open.get() node_ref=menu_ref>
                    {NAV_LINKS.into_iter().map(|link| {
                        let href = link.href;
                        view! {
                            <li class="navbar-item">
                                <a
                                    href=href
                                    class="navbar-link"
                                    class:active=move || is_active_link(href, &pathname.get())
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <div class="navbar-actions">
                    <a href="/entrar" class="navbar-btn navbar-btn-secondary">{ "Entrar" }</a>
                    <a href="/cadastrar" class="navbar-btn navbar-btn-primary">{ "Cadastrar" }</a>
                </div>

                <button
                    class="navbar-toggle"
                    class:active=move || menu_open.get()
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    node_ref=toggle_ref
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
