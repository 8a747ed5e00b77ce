//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped composition and delegates rendering details
//! to `components`. The dashboard tab pages render inside the dashboard
//! shell's outlet.

pub mod account;
pub mod address;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod orders;
