//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`select`, `orders`, `profile`, etc.) so
//! individual components depend on small focused models that test without a
//! browser.

pub mod catalog;
pub mod orders;
pub mod profile;
pub mod select;
pub mod ui;
