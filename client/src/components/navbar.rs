//! Top navigation bar with brand, page links, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell above every route. Reads and writes the
//! shared `UiState` for the theme and the collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::site::BRAND;
use crate::state::ui::UiState;

const LINKS: &[(&str, &str, bool)] = &[("Beranda", "/", true), ("Dashboard", "/dashboard", false)];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let _ = pathname.get();
        ui.update(UiState::close_menu);
    });

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">{BRAND}</a>

            <button
                class="navbar__menu-toggle"
                aria-label="Menu"
                aria-expanded=move || ui.get().menu_open.to_string()
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "☰"
            </button>

            <nav class="navbar__links" class:navbar__links--open=move || ui.get().menu_open>
                {LINKS
                    .iter()
                    .map(|&(label, href, exact)| {
                        view! {
                            <A href=href exact=exact attr:class="navbar__link">
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Ganti tema"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
