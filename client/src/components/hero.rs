//! Home page hero banner.

use leptos::prelude::*;

use crate::site::BRAND;

/// Full-width banner with the brand headline and a jump to the product grid.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <p class="hero__eyebrow">{BRAND}</p>
                <h1 class="hero__headline">"Kue rumahan, dibuat dengan sepenuh hati"</h1>
                <p class="hero__tagline">
                    "Bolu, tart, dan kue tradisional yang dipanggang setiap pagi dari bahan pilihan."
                </p>
                <a class="btn btn--primary hero__cta" href="#produk-terbaru">
                    "Lihat Produk"
                </a>
            </div>
            <div class="hero__art" aria-hidden="true">
                <img class="hero__image" src="/images/hero.jpg" alt=""/>
            </div>
        </section>
    }
}
