//! Closing call-to-action band on the home page.

use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="call-to-action">
            <h2 class="call-to-action__headline">"Punya acara spesial?"</h2>
            <p class="call-to-action__copy">
                "Pesan kue ulang tahun, hampers, atau snack box untuk acara Anda. "
                "Kami bantu sesuaikan ukuran dan dekorasinya."
            </p>
            <a class="btn btn--primary call-to-action__button" href="/dashboard/pesanan">
                "Pesan Sekarang"
            </a>
        </section>
    }
}
