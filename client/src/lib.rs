//! # yulita-client
//!
//! Leptos + WASM storefront UI for Yulita Cakes.
//!
//! This crate contains the pages (home, customer dashboard), the reusable
//! components they compose (including the dismissible `CustomSelect`), and
//! the small state models behind them. The same code renders on the server
//! (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
