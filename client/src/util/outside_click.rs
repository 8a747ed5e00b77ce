//! Scoped document listener used for outside-click dismissal.
//!
//! DESIGN
//! ======
//! A popup that closes on outside pointer-down needs a document-level
//! listener for exactly as long as it is open. `ListenerSlot` owns at most one
//! such listener: `acquire_with` installs it, `release` removes it, and drop
//! releases whatever is still held. Release is idempotent because the close
//! path and the unmount path both call it.
//!
//! The browser binding (`DocumentListener`) only exists under `hydrate`; SSR
//! renders never open a popup, so they never hold a listener.

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Handle to an installed listener that can remove itself.
pub trait Detach {
    fn detach(&mut self);
}

/// Holds zero or one active listener.
pub struct ListenerSlot<H: Detach> {
    handle: Option<H>,
}

impl<H: Detach> Default for ListenerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: Detach> ListenerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Install the listener built by `attach` unless one is already held.
    ///
    /// `attach` may return `None` when the host refuses the listener; the slot
    /// then stays empty. Returns `true` if a new listener was installed.
    pub fn acquire_with<F>(&mut self, attach: F) -> bool
    where
        F: FnOnce() -> Option<H>,
    {
        if self.handle.is_some() {
            return false;
        }
        self.handle = attach();
        self.handle.is_some()
    }

    /// Remove the held listener, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.detach();
        }
    }

    /// Follow the popup's open flag: hold a listener while open, none while
    /// closed. Repeated calls with the same flag change nothing.
    pub fn sync<F>(&mut self, open: bool, attach: F)
    where
        F: FnOnce() -> Option<H>,
    {
        if open {
            self.acquire_with(attach);
        } else {
            self.release();
        }
    }
}

impl<H: Detach> Drop for ListenerSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A listener registered on `document`.
#[cfg(feature = "hydrate")]
pub struct DocumentListener {
    document: web_sys::Document,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl DocumentListener {
    /// Register `handler` for `event` on the current document.
    pub fn attach<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, event, callback })
    }
}

#[cfg(feature = "hydrate")]
impl Detach for DocumentListener {
    fn detach(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Whether the event target is `root` or one of its descendants.
#[cfg(feature = "hydrate")]
pub fn event_within(root: &web_sys::Element, ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}
