//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront sections and form controls. Shared state is
//! read from Leptos context; everything else arrives through props.

pub mod call_to_action;
pub mod custom_select;
pub mod form_field;
pub mod hero;
pub mod latest_product;
pub mod navbar;
pub mod product_card;
pub mod section_title;
pub mod testimonials;
