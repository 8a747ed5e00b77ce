//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the logic stays testable off-browser.

pub mod dark_mode;
pub mod outside_click;
