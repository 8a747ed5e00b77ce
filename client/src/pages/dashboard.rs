//! Customer dashboard shell with tabbed sub-navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tab strip links to nested routes under `/dashboard`. The router's `A`
//! marks the link for the current location with `aria-current="page"`, which
//! the stylesheet keys the active tab off, and renders the matching tab page
//! into the `Outlet`. This page holds no state of its own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::{A, Outlet};

use crate::components::section_title::SectionTitle;
use crate::site::DASHBOARD_TITLE;

pub const DASHBOARD_ROOT: &str = "/dashboard";

/// One entry in the dashboard tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardTab {
    pub name: &'static str,
    /// Path segment relative to `DASHBOARD_ROOT`.
    pub path: &'static str,
}

impl DashboardTab {
    pub fn href(self) -> String {
        format!("{DASHBOARD_ROOT}/{}", self.path)
    }
}

pub const DASHBOARD_TABS: [DashboardTab; 3] = [
    DashboardTab { name: "Orderan Saya", path: "pesanan" },
    DashboardTab { name: "Alamat", path: "alamat" },
    DashboardTab { name: "Detail Akun", path: "akun" },
];

/// Tab opened when `/dashboard` itself is visited.
pub const DEFAULT_TAB: DashboardTab = DASHBOARD_TABS[0];

/// Dashboard page: heading, tab strip, and nested route outlet.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text=DASHBOARD_TITLE/>
        <div class="dashboard-page">
            <SectionTitle text1="Dashboard" text2="Anda"/>

            <div class="dashboard-page__body">
                <nav class="dashboard-tabs">
                    <ul class="dashboard-tabs__list">
                        {DASHBOARD_TABS
                            .iter()
                            .map(|tab| {
                                view! {
                                    <li class="dashboard-tabs__item">
                                        <A href=tab.href() attr:class="dashboard-tabs__link">
                                            {tab.name}
                                        </A>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>

                <div class="dashboard-page__content">
                    <div class="dashboard-page__panel">
                        <Outlet/>
                    </div>
                </div>
            </div>
        </div>
    }
}
