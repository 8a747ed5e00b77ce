//! Theme preference: read, apply, and toggle.
//!
//! The stored preference lives in `localStorage` under `STORAGE_KEY`; with no
//! stored value the system `prefers-color-scheme` decides. The active theme is
//! applied as `data-theme` on `<html>`, which the stylesheet keys off.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort and browser-only; SSR paths no-op so server
//! rendering stays deterministic (light theme).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "yulita_cakes_dark";

/// Value written to the `data-theme` attribute.
pub fn theme_attr(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a stored preference. Anything unrecognised counts as unset.
pub fn parse_stored(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "dark" => Some(true),
        "false" | "light" => Some(false),
        _ => None,
    }
}

/// Whether dark mode should be active on load.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| parse_stored(&raw));
        if let Some(dark) = stored {
            return dark;
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_attr(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme_attr(dark);
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
