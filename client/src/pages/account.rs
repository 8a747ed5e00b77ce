//! Dashboard "Detail Akun" tab: customer contact details.

use leptos::prelude::*;

use crate::components::form_field::{FormField, FormStatusLine, record_save};
use crate::state::profile::{AccountForm, FormStatus};

#[component]
pub fn AccountTab() -> impl IntoView {
    let form = RwSignal::new(AccountForm::default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        record_save(status, form.get_untracked().problems());
    };

    view! {
        <form class="profile-form" on:submit=on_submit novalidate=true>
            <h3 class="profile-form__title">"Detail Akun"</h3>

            <FormField
                label="Nama lengkap"
                value=Signal::derive(move || form.get().name)
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
                autocomplete="name"
            />
            <FormField
                label="Email"
                value=Signal::derive(move || form.get().email)
                on_input=Callback::new(move |v| form.update(|f| f.email = v))
                input_type="email"
                autocomplete="email"
            />
            <FormField
                label="Nomor telepon (opsional)"
                value=Signal::derive(move || form.get().phone)
                on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                input_type="tel"
                autocomplete="tel"
            />

            <div class="profile-form__actions">
                <button class="btn btn--primary" type="submit">"Simpan"</button>
            </div>
            <FormStatusLine status=status/>
        </form>
    }
}
