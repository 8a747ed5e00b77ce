//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::account::AccountTab;
use crate::pages::address::AddressTab;
use crate::pages::dashboard::{DEFAULT_TAB, DashboardPage};
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::orders::OrdersTab;
use crate::site::BRAND;
use crate::state::orders::OrdersState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let orders = RwSignal::new(OrdersState::seeded());

    provide_context(ui);
    provide_context(orders);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let dark = crate::util::dark_mode::read_preference();
            crate::util::dark_mode::apply(dark);
            ui.update(|u| u.dark_mode = dark);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/yulita-storefront.css"/>
        <Title text=BRAND/>

        <Router>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <ParentRoute path=StaticSegment("dashboard") view=DashboardPage>
                        <Route path=StaticSegment("pesanan") view=OrdersTab/>
                        <Route path=StaticSegment("alamat") view=AddressTab/>
                        <Route path=StaticSegment("akun") view=AccountTab/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=DEFAULT_TAB.href()/> }
                        />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
