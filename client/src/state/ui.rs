//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the storefront data models so the
//! navbar can evolve independently of page content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided via context by the app shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    /// Navigating anywhere collapses the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
