//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::site::NOT_FOUND_TITLE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=NOT_FOUND_TITLE/>
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Halaman yang Anda cari tidak ditemukan."</p>
            <a class="btn btn--primary" href="/">"Kembali ke Beranda"</a>
        </div>
    }
}
