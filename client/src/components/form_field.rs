//! Labelled text input and save-status helper shared by dashboard forms.

use leptos::prelude::*;

use crate::state::profile::FormStatus;

/// How long a "saved" confirmation stays visible.
#[cfg(feature = "hydrate")]
const SAVED_VISIBLE_MS: u32 = 3_000;

/// Labelled `<input>` bound to caller state.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = String::from("text"))] input_type: String,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Status line under a form; hidden while idle.
#[component]
pub fn FormStatusLine(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.get().message().is_some()>
            <p
                class="form-status"
                class:form-status--error=move || status.get().is_error()
                role="status"
            >
                {move || status.get().message().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Record a save attempt. A successful save clears itself after a short delay.
pub fn record_save(status: RwSignal<FormStatus>, problems: Vec<&'static str>) {
    let next = FormStatus::from_problems(problems);
    #[cfg(feature = "hydrate")]
    {
        if next == FormStatus::Saved {
            gloo_timers::callback::Timeout::new(SAVED_VISIBLE_MS, move || {
                if status.try_get_untracked() == Some(FormStatus::Saved) {
                    status.try_set(FormStatus::Idle);
                }
            })
            .forget();
        }
    }
    status.set(next);
}
