//! Dismissible dropdown select.
//!
//! DESIGN
//! ======
//! Controlled component: the caller passes the option list and the current
//! value and receives change intents through `on_change`. The only state held
//! here is whether the option panel is open (`SelectState`).
//!
//! While open, a single `mousedown` listener on `document` closes the panel
//! when the press lands outside this control. The listener lives in a
//! `ListenerSlot` that is acquired on open and released on close and on
//! unmount.

#[cfg(test)]
#[path = "custom_select_test.rs"]
mod custom_select_test;

use leptos::prelude::*;

use crate::state::select::{
    DEFAULT_PLACEHOLDER, OptionValue, SelectOption, SelectState, check_options, display_label, is_activation_key,
    is_selected,
};

const WRAPPER_CLASS: &str = "custom-select";
const TRIGGER_CLASS: &str = "custom-select__trigger";
const PANEL_CLASS: &str = "custom-select__panel";
const OPTION_CLASS: &str = "custom-select__option";

/// Append caller overrides to a base class list.
fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

fn wrapper_class(absolute: bool) -> String {
    if absolute { format!("{WRAPPER_CLASS} {WRAPPER_CLASS}--anchor") } else { WRAPPER_CLASS.to_owned() }
}

fn trigger_class(extra: &str) -> String {
    join_classes(TRIGGER_CLASS, extra)
}

fn panel_class(absolute: bool, extra: &str) -> String {
    let base = if absolute { format!("{PANEL_CLASS} {PANEL_CLASS}--absolute") } else { PANEL_CLASS.to_owned() };
    join_classes(&base, extra)
}

fn option_class(selected: bool) -> String {
    if selected { format!("{OPTION_CLASS} {OPTION_CLASS}--selected") } else { OPTION_CLASS.to_owned() }
}

fn chevron_class(open: bool) -> &'static str {
    if open { "custom-select__chevron custom-select__chevron--open" } else { "custom-select__chevron" }
}

/// Row activation: close the panel and hand the row's value to `notify`.
///
/// `notify` runs exactly once, before the closed state is returned for the
/// caller to store.
fn apply_choice(current: SelectState, option: &SelectOption, notify: impl FnOnce(OptionValue)) -> SelectState {
    let mut next = current;
    let value = next.choose(option);
    notify(value);
    next
}

/// Dropdown select over caller-owned state.
///
/// `absolute_position` floats the option panel over following content
/// instead of pushing it down.
#[component]
pub fn CustomSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<OptionValue>>,
    on_change: Callback<OptionValue>,
    #[prop(into, default = String::from(DEFAULT_PLACEHOLDER))] placeholder: String,
    #[prop(into, optional)] button_class: String,
    #[prop(into, optional)] options_class: String,
    #[prop(optional)] absolute_position: bool,
) -> impl IntoView {
    let state = RwSignal::new(SelectState::default());
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();

    for issue in check_options(&options.get_untracked()) {
        leptos::logging::warn!("custom select: {issue}");
    }

    #[cfg(feature = "hydrate")]
    {
        use crate::util::outside_click::{DocumentListener, ListenerSlot, event_within};

        let slot = StoredValue::new_local(ListenerSlot::<DocumentListener>::new());
        Effect::new(move || {
            let open = state.get().is_open();
            slot.update_value(|s| {
                s.sync(open, || {
                    DocumentListener::attach("mousedown", move |ev| {
                        let Some(root) = wrapper_ref.get_untracked() else {
                            return;
                        };
                        let mut next = state.get_untracked();
                        if next.dismiss_outside(event_within(&root, &ev)) {
                            state.set(next);
                        }
                    })
                });
            });
        });
        on_cleanup(move || {
            slot.try_update_value(ListenerSlot::release);
        });
    }

    let commit = Callback::new(move |option: SelectOption| {
        let next = apply_choice(state.get_untracked(), &option, |value| on_change.run(value));
        state.set(next);
    });

    let label = move || display_label(&options.get(), selected.get().as_ref(), &placeholder).to_owned();
    let is_open = move || state.get().is_open();
    let panel_class = panel_class(absolute_position, &options_class);

    let rows = move || {
        let current = selected.get();
        options
            .get()
            .into_iter()
            .map(|option| {
                let chosen = is_selected(&option, current.as_ref());
                let on_click_option = option.clone();
                let on_key_option = option.clone();
                view! {
                    <div
                        class=option_class(chosen)
                        role="option"
                        aria-selected=chosen.to_string()
                        tabindex="0"
                        on:click=move |_| commit.run(on_click_option.clone())
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if is_activation_key(&ev.key()) {
                                ev.prevent_default();
                                commit.run(on_key_option.clone());
                            }
                        }
                    >
                        <span class="custom-select__label">{option.label}</span>
                        <Show when=move || chosen>
                            <span class="custom-select__check">
                                <svg viewBox="0 0 20 20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                    <path d="M4 10.5l4 4 8-9"></path>
                                </svg>
                            </span>
                        </Show>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class=wrapper_class(absolute_position) node_ref=wrapper_ref>
            <button
                type="button"
                class=trigger_class(&button_class)
                aria-haspopup="listbox"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| {
                    state.update(|s| {
                        s.toggle();
                    });
                }
            >
                <span class="custom-select__value">{label}</span>
                <span class="custom-select__icon">
                    <svg
                        class=move || chevron_class(is_open())
                        viewBox="0 0 20 20"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="1.5"
                        aria-hidden="true"
                    >
                        <path d="M6.5 8l3.5-3.5L13.5 8M6.5 12l3.5 3.5 3.5-3.5"></path>
                    </svg>
                </span>
            </button>

            <Show when=is_open>
                <div class=panel_class.clone() role="listbox">
                    {rows}
                </div>
            </Show>
        </div>
    }
}
