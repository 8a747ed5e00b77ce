//! Dashboard "Alamat" tab: shipping address form.

use leptos::prelude::*;

use crate::components::custom_select::CustomSelect;
use crate::components::form_field::{FormField, FormStatusLine, record_save};
use crate::state::profile::{AddressForm, FormStatus, province_options};
use crate::state::select::OptionValue;

#[component]
pub fn AddressTab() -> impl IntoView {
    let form = RwSignal::new(AddressForm::default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_province = Callback::new(move |value: OptionValue| form.update(|f| f.province = Some(value)));
    let province = Signal::derive(move || form.get().province);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        record_save(status, form.get_untracked().problems());
    };

    view! {
        <form class="profile-form" on:submit=on_submit novalidate=true>
            <h3 class="profile-form__title">"Alamat Pengiriman"</h3>

            <FormField
                label="Nama penerima"
                value=Signal::derive(move || form.get().recipient)
                on_input=Callback::new(move |v| form.update(|f| f.recipient = v))
                autocomplete="name"
            />
            <FormField
                label="Nomor telepon"
                value=Signal::derive(move || form.get().phone)
                on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                input_type="tel"
                autocomplete="tel"
            />
            <FormField
                label="Alamat"
                value=Signal::derive(move || form.get().street)
                on_input=Callback::new(move |v| form.update(|f| f.street = v))
                autocomplete="street-address"
            />
            <FormField
                label="Kota"
                value=Signal::derive(move || form.get().city)
                on_input=Callback::new(move |v| form.update(|f| f.city = v))
                autocomplete="address-level2"
            />

            <div class="form-field">
                <span class="form-field__label">"Provinsi"</span>
                <CustomSelect
                    options=province_options()
                    selected=province
                    on_change=on_province
                    placeholder="Pilih provinsi"
                    absolute_position=true
                />
            </div>

            <FormField
                label="Kode pos"
                value=Signal::derive(move || form.get().postal_code)
                on_input=Callback::new(move |v| form.update(|f| f.postal_code = v))
                autocomplete="postal-code"
            />

            <div class="profile-form__actions">
                <button class="btn btn--primary" type="submit">"Simpan"</button>
            </div>
            <FormStatusLine status=status/>
        </form>
    }
}
