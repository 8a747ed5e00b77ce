//! Marketing home page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::call_to_action::CallToAction;
use crate::components::hero::Hero;
use crate::components::latest_product::LatestProduct;
use crate::components::testimonials::Testimonials;
use crate::site::HOME_TITLE;

/// Home page: hero, latest products, testimonials, call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=HOME_TITLE/>
        <div class="page-transition">
            <Hero/>
            <LatestProduct/>
            <Testimonials/>
            <CallToAction/>
        </div>
    }
}
