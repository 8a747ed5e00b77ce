//! Customer testimonials on the home page.

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::state::catalog::{MAX_RATING, TESTIMONIALS, Testimonial, star_counts};

fn stars(rating: u8) -> String {
    let (filled, empty) = star_counts(rating);
    format!("{}{}", "★".repeat(usize::from(filled)), "☆".repeat(usize::from(empty)))
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <span class="testimonial-card__stars" aria-label=format!("{} dari {MAX_RATING} bintang", testimonial.rating.min(MAX_RATING))>
                {stars(testimonial.rating)}
            </span>
            <blockquote class="testimonial-card__quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-card__author">
                <span class="testimonial-card__name">{testimonial.name}</span>
                <span class="testimonial-card__city">{testimonial.city}</span>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <SectionTitle text1="Kata" text2="Pelanggan"/>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! { <TestimonialCard testimonial=*t/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
