//! Two-part section heading used across storefront pages.

use leptos::prelude::*;

/// Heading rendered as "`text1` `text2`" with the second word accented and
/// an underline rule after it.
#[component]
pub fn SectionTitle(#[prop(into)] text1: String, #[prop(into)] text2: String) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2 class="section-title__text">
                {text1}
                " "
                <span class="section-title__accent">{text2}</span>
            </h2>
            <span class="section-title__rule" aria-hidden="true"></span>
        </div>
    }
}
