//! "Produk Terbaru" grid on the home page.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::section_title::SectionTitle;
use crate::state::catalog::{LATEST_LIMIT, PRODUCTS, latest_products};

#[component]
pub fn LatestProduct() -> impl IntoView {
    let products = latest_products(PRODUCTS, LATEST_LIMIT);

    view! {
        <section id="produk-terbaru" class="latest-products">
            <SectionTitle text1="Produk" text2="Terbaru"/>
            <p class="latest-products__lead">
                "Kreasi terbaru dari dapur kami. Pilih ukuran untuk melihat harga."
            </p>
            <div class="latest-products__grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
