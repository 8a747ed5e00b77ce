//! Product tile with a size selector and live price.
//!
//! The card owns the chosen size and passes it down to `CustomSelect`, which
//! only reports the shopper's choice back.

use leptos::prelude::*;

use crate::components::custom_select::CustomSelect;
use crate::state::catalog::{Product, format_rupiah};
use crate::state::select::OptionValue;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let size = RwSignal::new(product.default_size());
    let on_size = Callback::new(move |value: OptionValue| size.set(Some(value)));
    let price = move || {
        product
            .price_for(size.get().as_ref())
            .map(format_rupiah)
            .unwrap_or_default()
    };

    view! {
        <article class="product-card">
            <img class="product-card__image" src=product.image alt=product.name loading="lazy"/>
            <div class="product-card__body">
                <span class="product-card__category">{product.category}</span>
                <h3 class="product-card__name">{product.name}</h3>
                <CustomSelect
                    options=product.size_options()
                    selected=size
                    on_change=on_size
                    placeholder="Pilih ukuran"
                    button_class="product-card__size"
                    absolute_position=true
                />
                <p class="product-card__price">{price}</p>
            </div>
        </article>
    }
}
